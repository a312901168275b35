//! Process exit statuses, one per failure category.

use std::process::ExitCode;

use ptrwalk_common::error::{AddressError, MaskError, RangeError, ResolverSetupError};

pub const INTERNAL: u8 = 1;
// 2 is left to clap for usage errors.
pub const MASK_UNPARSEABLE: u8 = 3;
pub const MASK_NON_CONTIGUOUS: u8 = 4;
pub const NETWORK_UNPARSEABLE: u8 = 5;
pub const RANGE_OVERFLOW: u8 = 6;
pub const RESOLVER_SETUP: u8 = 7;

pub fn code_for(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(status_for(err))
}

pub(crate) fn status_for(err: &anyhow::Error) -> u8 {
    if let Some(mask_err) = err.downcast_ref::<MaskError>() {
        return match mask_err {
            MaskError::NonContiguous(_) => MASK_NON_CONTIGUOUS,
            MaskError::Unparseable(_) | MaskError::PrefixTooLong(_) => MASK_UNPARSEABLE,
        };
    }
    if err.is::<AddressError>() {
        return NETWORK_UNPARSEABLE;
    }
    if err.is::<RangeError>() {
        return RANGE_OVERFLOW;
    }
    if err.is::<ResolverSetupError>() {
        return RESOLVER_SETUP;
    }
    INTERNAL
}
