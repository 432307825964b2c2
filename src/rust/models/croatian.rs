// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static CROATIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 1, 0, 0, 2, 3, 3, 0, 0, 0, 1, 3, 3, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 0, 1, 1, 1, 3, 3, 0, 0, 1, 0, 2, 2, 0, 0, 1, 0, 0, 1, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 0, 1, 1, 1, 3, 3, 0, 1, 1, 1, 3, 3, 1, 1, 2, 0, 0, 0, 1, 2, 0, 0, 3, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 0, 0, 0, 0, 2, 3, 0, 0, 0, 1, 3, 3, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 3, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 2, 2, 1, 2, 0, 0, 0, 1, 2, 3, 2, 0, 1, 2, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 3, 1, 1, 1, 2, 3, 2, 1, 0, 0, 0, 3, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 1, 3, 3, 2, 0, 1, 0, 1, 0, 0, 1, 3, 2, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 1, 2, 2, 0, 0, 0, 0, 1, 0, 1, 1, 3, 2, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 0, 3, 3, 0, 3, 3, 1, 2, 2, 2, 2, 1, 0, 1, 1, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 1, 0, 3, 2, 3, 1, 3, 2, 0, 3, 1, 2, 2, 2, 1, 0, 1, 1, 1, 2, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 0, 0, 1, 0, 2, 3, 0, 0, 0, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 0, 3, 1, 1, 1, 0, 2, 0, 1, 0, 0, 2, 1, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 0, 1, 2, 2, 0, 1, 1, 1, 2, 0, 0, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 2, 3, 2, 3, 3, 2, 2, 3, 3, 0, 0, 0, 0, 1, 1, 1, 1, 2, 0, 0, 1, 0, 3, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 1, 3, 2, 1, 1, 0, 2, 0, 1, 1, 0, 2, 0, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 2, 0, 2, 1, 3, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 0, 1, 1, 3, 0, 3, 3, 3, 3, 2, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 2, 3, 2, 3, 3, 2, 3, 2, 1, 2, 0, 2, 1, 2, 1, 0, 0, 0, 0, 1, 1, 3, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 3, 2, 3, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 1, 3, 1, 3, 1, 3, 1, 2, 1, 2, 2, 2, 2, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 3, 0, 0, 0, 2, 3, 3, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 2, 3, 2, 2, 2, 3, 2, 2, 3, 2, 2, 2, 2, 2, 0, 2, 1, 1, 0, 3, 2, 3, 2, 1, 2, 1, 1, 3, 3, 2, 0, 3, 3, 3, 3, 2, 2, 2, 2, 2, 3, 0, 1, 2, 0, 2, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 1, 0, 3, 0, 3, 2, 1, 1, 0, 1, 1, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 0, 0, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 2, 3, 3, 1, 0, 0, 2, 2, 1, 2, 0, 0, 2, 2, 2, 1, 3, 3, 0, 2, 3, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 3, 2, 3, 2, 1, 1, 0, 1, 2, 2, 2, 3, 3, 2, 2, 0, 0, 1, 1, 3, 2, 2, 3, 0, 1, 2, 1, 3, 3, 0, 0, 3, 3, 3, 3, 0, 3, 2, 2, 3, 3, 0, 3, 2, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 0, 3, 1, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 2, 3, 2, 2, 2, 0, 3, 3, 3, 2, 0, 0, 2, 2, 2, 2, 2, 2, 1, 2, 0, 2, 0, 3, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 0, 3, 0, 0, 0, 1, 2, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 3, 0, 2, 3, 2, 2, 1, 0, 3, 3, 3, 2, 0, 0, 2, 2, 2, 2, 2, 2, 1, 3, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 3, 0, 1, 2, 2, 2, 2, 3, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 2, 3, 0, 0, 3, 1, 2, 2, 0, 1, 0, 2, 2, 1, 0, 1, 0, 1, 1, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 2, 2, 2, 2, 0, 2, 0, 3, 1, 3, 3, 2, 2, 1, 2, 3, 2, 1, 2, 2, 1, 3, 3, 1, 2, 2, 1, 3, 3, 1, 0, 3, 2, 3, 3, 1, 2, 2, 2, 3, 2, 0, 2, 2, 1, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 0, 3, 2, 2, 2, 0, 2, 2, 1, 2, 1, 1, 2, 0, 0, 2, 0, 0, 2, 0, 3, 2, 2, 2, 0, 1, 2, 1, 3, 2, 0, 0, 3, 3, 2, 3, 2, 2, 1, 2, 0, 2, 0, 2, 2, 1, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 2, 0, 1, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 2, 3, 2, 2, 0, 0, 3, 3, 2, 2, 0, 0, 2, 2, 3, 2, 2, 3, 1, 2, 2, 1, 0, 2, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 1, 2, 0, 3, 3, 2, 3, 2, 3, 0, 3, 2, 0, 2, 0, 0, 0, 2, 0, 2, 3, 3, 2, 2, 0, 2, 2, 2, 2, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 1, 0, 0, 1, 0, 2, 0, 0, 2, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 2, 0, 0, 2, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 3, 0, 3, 3, 2, 2, 1, 0, 2, 2, 2, 2, 2, 0, 2, 1, 2, 2, 2, 2, 3, 2, 1, 0, 0, 2, 2, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 2, 3, 0, 1, 0, 0, 2, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 3, 0, 0, 2, 2, 2, 1, 0, 3, 3, 2, 3, 0, 0, 1, 0, 1, 2, 2, 0, 2, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 2, 2, 0, 2, 1, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 3, 0, 1, 3, 2, 2, 1, 0, 2, 3, 1, 2, 0, 0, 1, 0, 2, 2, 1, 0, 2, 1, 2, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 0, 1, 1, 0, 1, 0, 2, 0, 0, 1, 2, 0, 1, 0, 1, 0, 0, 3, 0, 1, 3, 2, 2, 0, 1, 3, 2, 1, 2, 0, 0, 2, 0, 1, 2, 2, 0, 1, 2, 3, 2, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 3, 0, 3, 2, 1, 2, 2, 2, 0, 2, 2, 2, 1, 0, 2, 2, 3, 2, 0, 0, 1, 1, 3, 2, 0, 0, 0, 2, 2, 3, 1, 2, 0, 1, 0, 2, 1, 2, 0, 1, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 2, 3, 1, 2, 0, 0, 2, 0, 2, 2, 2, 0, 1, 1, 0, 0, 0, 2, 0, 3, 3, 2, 2, 1, 0, 2, 2, 2, 2, 0, 0, 2, 1, 2, 2, 2, 0, 2, 2, 1, 1, 0, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 0, 3, 0, 0, 2, 0, 3, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 3, 0, 0, 2, 1, 1, 1, 0, 2, 2, 3, 2, 0, 0, 0, 0, 2, 2, 2, 1, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 3, 0, 3, 0, 2, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 3, 2, 2, 2, 1, 2, 2, 2, 2, 0, 0, 2, 2, 1, 2, 1, 1, 0, 2, 2, 0, 0, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 2, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 1, 2, 2, 2, 1, 0, 1, 3, 1, 2, 0, 0, 1, 1, 0, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 2, 2, 0, 1, 0, 0, 0, 1, 0, 1, 2, 1, 0, 0, 0, 0, 2, 0, 2, 0, 3, 2, 0, 0, 1, 0, 3, 2, 2, 0, 0, 0, 0, 0, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 2, 0, 3, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 1, 3, 2, 1, 0, 0, 3, 1, 1, 2, 0, 0, 2, 1, 2, 2, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 0, 3, 1, 0, 2, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 1, 2, 1, 2, 0, 0, 2, 2, 2, 0, 0, 0, 1, 1, 1, 2, 1, 1, 1, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 0, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 2, 2, 2, 0, 0, 2, 2, 1, 1, 0, 0, 1, 0, 1, 1, 2, 0, 0, 1, 0, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 1, 0, 2, 0, 1, 0, 2, 1, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP852_CROATIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 42, 43, 36, 31, 47, 41, 49, 25, 44, 37, 39, 38, 24, 30,
    27, 100, 32, 33, 26, 40, 48, 101, 102, 103, 45, 253, 253, 253, 253, 253,
    253, 1, 20, 18, 14, 3, 29, 19, 28, 2, 9, 10, 13, 16, 5, 4,
    12, 104, 6, 7, 8, 11, 15, 105, 106, 107, 17, 253, 253, 253, 253, 251,
    108, 109, 110, 111, 112, 113, 35, 114, 115, 116, 117, 118, 119, 120, 121, 54,
    122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 253, 21,
    136, 137, 138, 139, 140, 141, 53, 34, 142, 143, 253, 144, 50, 145, 253, 253,
    253, 253, 253, 253, 253, 146, 147, 148, 149, 253, 253, 253, 253, 150, 151, 253,
    253, 253, 253, 253, 253, 253, 152, 153, 253, 253, 253, 253, 253, 253, 253, 253,
    46, 52, 154, 155, 156, 157, 158, 159, 160, 253, 253, 253, 253, 161, 162, 253,
    163, 164, 165, 166, 167, 168, 51, 23, 169, 170, 171, 172, 173, 174, 175, 253,
    251, 253, 253, 176, 253, 253, 253, 253, 253, 253, 253, 177, 178, 179, 253, 253,
];

pub(crate) static CP852_CROATIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP852",
    language: "Croatian",
    char_to_order_map: &CP852_CROATIAN_CHAR_TO_ORDER,
    language_model: &CROATIAN_LANG_MODEL,
    typical_positive_ratio: 0.971507,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_16_CROATIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 42, 43, 36, 31, 47, 41, 49, 25, 44, 37, 39, 38, 24, 30,
    27, 100, 32, 33, 26, 40, 48, 101, 102, 103, 45, 253, 253, 253, 253, 253,
    253, 1, 20, 18, 14, 3, 29, 19, 28, 2, 9, 10, 13, 16, 5, 4,
    12, 104, 6, 7, 8, 11, 15, 105, 106, 107, 17, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 108, 109, 110, 253, 253, 51, 253, 23, 253, 111, 253, 112, 251, 113, 114,
    253, 253, 50, 115, 53, 253, 253, 253, 34, 21, 116, 253, 117, 118, 119, 120,
    121, 122, 123, 124, 125, 54, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135,
    52, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148, 149, 150,
    151, 152, 153, 154, 155, 35, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165,
    46, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179, 180,
];

pub(crate) static ISO_8859_16_CROATIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-16",
    language: "Croatian",
    char_to_order_map: &ISO_8859_16_CROATIAN_CHAR_TO_ORDER,
    language_model: &CROATIAN_LANG_MODEL,
    typical_positive_ratio: 0.971507,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_2_CROATIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 42, 43, 36, 31, 47, 41, 49, 25, 44, 37, 39, 38, 24, 30,
    27, 100, 32, 33, 26, 40, 48, 101, 102, 103, 45, 253, 253, 253, 253, 253,
    253, 1, 20, 18, 14, 3, 29, 19, 28, 2, 9, 10, 13, 16, 5, 4,
    12, 104, 6, 7, 8, 11, 15, 105, 106, 107, 17, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 108, 253, 109, 253, 110, 111, 253, 253, 51, 112, 113, 114, 251, 53, 115,
    253, 116, 253, 117, 253, 118, 119, 120, 253, 23, 121, 122, 123, 253, 34, 124,
    125, 126, 127, 128, 129, 130, 54, 131, 50, 132, 133, 134, 135, 136, 137, 138,
    52, 139, 140, 141, 142, 143, 144, 253, 145, 146, 147, 148, 149, 150, 151, 152,
    153, 154, 155, 156, 157, 158, 35, 159, 21, 160, 161, 162, 163, 164, 165, 166,
    46, 167, 168, 169, 170, 171, 172, 253, 173, 174, 175, 176, 177, 178, 179, 253,
];

pub(crate) static ISO_8859_2_CROATIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-2",
    language: "Croatian",
    char_to_order_map: &ISO_8859_2_CROATIAN_CHAR_TO_ORDER,
    language_model: &CROATIAN_LANG_MODEL,
    typical_positive_ratio: 0.971507,
    keep_ascii_letters: false,
    reversed: false,
};

static MACLATIN2_CROATIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 42, 43, 36, 31, 47, 41, 49, 25, 44, 37, 39, 38, 24, 30,
    27, 100, 32, 33, 26, 40, 48, 101, 102, 103, 45, 253, 253, 253, 253, 253,
    253, 1, 20, 18, 14, 3, 29, 19, 28, 2, 9, 10, 13, 16, 5, 4,
    12, 104, 6, 7, 8, 11, 15, 105, 106, 107, 17, 253, 253, 253, 253, 251,
    108, 109, 110, 111, 112, 113, 114, 115, 116, 50, 117, 21, 54, 35, 118, 119,
    120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135,
    253, 253, 136, 253, 253, 253, 253, 137, 253, 253, 253, 138, 253, 253, 139, 140,
    141, 142, 253, 253, 143, 144, 253, 253, 145, 146, 147, 148, 149, 150, 151, 152,
    153, 154, 253, 253, 155, 156, 253, 253, 253, 253, 253, 157, 158, 159, 160, 161,
    253, 253, 253, 253, 253, 253, 253, 253, 162, 163, 164, 165, 253, 253, 166, 167,
    168, 51, 253, 253, 23, 169, 170, 171, 172, 173, 174, 53, 34, 175, 176, 177,
    178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, 192, 193,
];

pub(crate) static MACLATIN2_CROATIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacLatin2",
    language: "Croatian",
    char_to_order_map: &MACLATIN2_CROATIAN_CHAR_TO_ORDER,
    language_model: &CROATIAN_LANG_MODEL,
    typical_positive_ratio: 0.971748,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1250_CROATIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 42, 43, 36, 31, 47, 41, 49, 25, 44, 37, 39, 38, 24, 30,
    27, 100, 32, 33, 26, 40, 48, 101, 102, 103, 45, 253, 253, 253, 253, 253,
    253, 1, 20, 18, 14, 3, 29, 19, 28, 2, 9, 10, 13, 16, 5, 4,
    12, 104, 6, 7, 8, 11, 15, 105, 106, 107, 17, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 51, 253, 108, 109, 53, 110,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 23, 253, 111, 112, 34, 113,
    253, 114, 253, 115, 253, 116, 253, 253, 253, 253, 117, 253, 253, 251, 253, 118,
    253, 253, 253, 119, 253, 120, 253, 253, 253, 121, 122, 253, 123, 253, 124, 125,
    126, 127, 128, 129, 130, 131, 54, 132, 50, 133, 134, 135, 136, 137, 138, 139,
    52, 140, 141, 142, 143, 144, 145, 253, 146, 147, 148, 149, 150, 151, 152, 153,
    154, 155, 156, 157, 158, 159, 35, 160, 21, 161, 162, 163, 164, 165, 166, 167,
    46, 168, 169, 170, 171, 172, 173, 253, 174, 175, 176, 177, 178, 179, 180, 253,
];

pub(crate) static WINDOWS_1250_CROATIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1250",
    language: "Croatian",
    char_to_order_map: &WINDOWS_1250_CROATIAN_CHAR_TO_ORDER,
    language_model: &CROATIAN_LANG_MODEL,
    typical_positive_ratio: 0.971507,
    keep_ascii_letters: false,
    reversed: false,
};
