//! Frequency tables for the multi-byte charsets.

mod big5;
mod euckr;
mod euctw;
mod gb2312;
mod jis;
mod johab;
mod jp_context;

pub(crate) use big5::BIG5_DISTRIBUTION;
pub(crate) use euckr::EUCKR_DISTRIBUTION;
pub(crate) use euctw::EUCTW_DISTRIBUTION;
pub(crate) use gb2312::GB2312_DISTRIBUTION;
pub(crate) use jis::JIS_DISTRIBUTION;
pub(crate) use johab::JOHAB_TO_EUCKR_ORDER;
pub(crate) use jp_context::JP2_CHAR_CONTEXT;
