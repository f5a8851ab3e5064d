use crate::args::GeneratorArgs;
use crate::domain::run::RunConfig;

pub(crate) fn to_run_config(args: &GeneratorArgs) -> RunConfig {
    RunConfig {
        destination: args.dest.clone(),
        request_count: args.request_count,
        use_valid_header: args.use_valid_header(),
        kind: args.mode.to_domain(),
    }
}
