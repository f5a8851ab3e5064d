use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use rand::Rng;
use rand::distributions::{Distribution, Standard};

pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const CUSTOM_HEADER_NAME: &str = "my_custom_header";
pub const CUSTOM_HEADER_VALUE: &str = "foo_bar";

/// Forwarding address sent on the variant path when `--valid` is in effect.
pub const VALID_ADDRESS: &str = "123.123.123.123";
/// Forwarding address sent on the variant path when `--invalid` is in effect.
///
/// Syntactically a fine IPv4 address; "invalid" is whatever the system under
/// test decides it is.
pub const INVALID_ADDRESS: &str = "111.111.111.111";

/// Header name to value, built fresh for every request.
pub type HeaderSet = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Forwarding header only.
    Random,
    /// Forwarding header plus the static custom header.
    Variant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Valid,
    Invalid,
}

impl AddressKind {
    #[must_use]
    pub const fn from_valid(use_valid: bool) -> Self {
        if use_valid {
            AddressKind::Valid
        } else {
            AddressKind::Invalid
        }
    }
}

#[must_use]
pub const fn variant_address(kind: AddressKind) -> &'static str {
    match kind {
        AddressKind::Valid => VALID_ADDRESS,
        AddressKind::Invalid => INVALID_ADDRESS,
    }
}

/// Generates a random class A/B/C IPv4 address.
///
/// Draws are repeated until the address is not in 0.0.0.0/8, loopback,
/// link-local, multicast, or the 240.0.0.0/4 reserved block.
pub fn random_ipv4<R>(rng: &mut R) -> Ipv4Addr
where
    R: Rng + ?Sized,
{
    loop {
        let bits: u32 = Standard.sample(rng);
        let address = Ipv4Addr::from(bits);
        if is_class_abc_host(address) {
            return address;
        }
    }
}

#[must_use]
pub fn is_class_abc_host(address: Ipv4Addr) -> bool {
    let [first, ..] = address.octets();
    first != 0
        && first < 224
        && !address.is_loopback()
        && !address.is_link_local()
        && !address.is_unspecified()
}

#[must_use]
pub fn build_header(mode: HeaderMode, value: &str) -> HeaderSet {
    let mut headers = HeaderSet::new();
    headers.insert(FORWARDED_FOR_HEADER.to_owned(), value.to_owned());
    if mode == HeaderMode::Variant {
        headers.insert(
            CUSTOM_HEADER_NAME.to_owned(),
            CUSTOM_HEADER_VALUE.to_owned(),
        );
    }
    headers
}
