mod mapper;

pub(crate) use mapper::to_run_config;
