// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static LATVIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 0, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 3, 3, 3, 0, 0, 1, 0, 2, 0, 0, 1, 0, 0, 2, 3, 3, 0, 0, 0, 3, 0, 0, 0, 0, 1, 0, 2, 0, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 2, 3, 2, 1, 0, 2, 0, 0, 0, 1, 3, 0, 0, 0, 1, 0, 2, 0, 0, 1, 0, 1, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 1, 3, 3, 3, 3, 1, 0, 0, 0, 3, 0, 0, 1, 0, 0, 2, 2, 3, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 2, 0, 2, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 0, 0, 2, 0, 2, 0, 1, 0, 0, 0, 3, 3, 3, 0, 0, 2, 2, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 3, 3, 1, 3, 3, 3, 3, 0, 0, 0, 0, 3, 1, 1, 2, 2, 0, 0, 3, 3, 1, 1, 1, 2, 0, 0, 1, 0, 1, 0, 3, 0, 2, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 2, 0, 0, 0, 2, 1, 0, 1, 0, 0, 3, 0, 0, 0, 0, 1, 3, 0, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 2, 3, 1, 3, 2, 3, 3, 3, 2, 3, 3, 3, 2, 2, 3, 2, 3, 3, 3, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 2, 2, 3, 3, 1, 2, 3, 1, 0, 1, 0, 3, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 0, 3, 3, 0, 3, 3, 3, 3, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 2, 2, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 3, 2, 2, 1, 1, 1, 0, 1, 1, 2, 0, 1, 1, 0, 0, 3, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 2, 2, 2, 2, 0, 2, 0, 2, 3, 2, 2, 0, 1, 2, 0, 1, 2, 1, 0, 0, 0, 3, 1, 0, 0, 0, 1, 0, 1, 1, 1, 2, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 0, 3, 2, 3, 1, 3, 3, 3, 1, 3, 2, 3, 3, 0, 3, 0, 3, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 3, 0, 3, 2, 3, 0, 3, 3, 3, 0, 3, 3, 3, 0, 3, 2, 0, 2, 3, 3, 3, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 3, 3, 3, 3, 1, 2, 2, 3, 2, 2, 1, 3, 2, 3, 3, 1, 1, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 2, 2, 2, 3, 2, 2, 3, 3, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 3, 2, 3, 1, 3, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 3, 0, 3, 0, 3, 0, 3, 2, 3, 0, 2, 2, 0, 0, 3, 2, 0, 3, 0, 3, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 1, 3, 0, 3, 2, 1, 0, 3, 1, 0, 2, 2, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 3, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 3, 0, 3, 0, 3, 0, 2, 3, 3, 0, 3, 2, 3, 0, 3, 2, 0, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 1, 2, 2, 0, 2, 1, 2, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 2, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 3, 3, 1, 3, 3, 2, 0, 3, 0, 1, 3, 3, 3, 2, 3, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 3, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 2, 3, 3, 1, 3, 2, 2, 2, 3, 1, 2, 2, 3, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 2, 2, 0, 3, 2, 3, 0, 2, 0, 1, 0, 2, 1, 0, 3, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 0, 2, 3, 2, 0, 3, 3, 1, 0, 3, 0, 0, 2, 2, 0, 0, 2, 0, 0, 0, 0, 2, 3, 2, 3, 0, 2, 2, 2, 2, 2, 0, 0, 0, 0, 2, 2, 1, 2, 3, 1, 1, 2, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 0, 3, 0, 2, 0, 3, 0, 0, 0, 1, 1, 0, 0, 1, 2, 1, 2, 1, 0, 0, 0, 0, 0, 2, 2, 0, 2, 2, 3, 0, 0, 1, 0, 0, 1, 1, 2, 0, 3, 3, 0, 1, 1, 2, 0, 3, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1,
    0, 3, 0, 3, 3, 3, 1, 3, 0, 3, 3, 2, 0, 2, 0, 2, 3, 0, 1, 0, 2, 0, 0, 0, 2, 1, 0, 2, 2, 0, 2, 2, 1, 1, 2, 1, 0, 0, 2, 2, 1, 2, 1, 2, 0, 1, 2, 2, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 3, 0, 3, 3, 2, 0, 2, 3, 2, 0, 2, 3, 2, 0, 0, 2, 0, 0, 2, 0, 1, 2, 2, 3, 1, 2, 2, 3, 2, 1, 2, 0, 1, 0, 1, 2, 2, 0, 1, 1, 1, 1, 2, 0, 0, 2, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 2, 0, 1,
    0, 3, 2, 3, 2, 3, 3, 2, 0, 3, 2, 0, 0, 2, 2, 0, 0, 1, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 2, 3, 3, 0, 3, 1, 2, 3, 2, 0, 2, 0, 1, 0, 0, 3, 0, 2, 1, 0, 2, 2, 2, 3, 1, 1, 1, 1, 3, 0, 1, 0, 0, 0, 0, 2, 2, 0, 1, 2, 2, 3, 2, 2, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0,
    0, 3, 0, 3, 0, 3, 3, 3, 0, 3, 2, 0, 0, 1, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 1, 2, 3, 2, 2, 0, 3, 2, 1, 2, 2, 1, 0, 0, 0, 2, 1, 1, 2, 2, 1, 3, 1, 1, 0, 1, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1,
    0, 3, 2, 3, 0, 3, 0, 2, 1, 3, 0, 0, 0, 2, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1, 2, 1, 2, 3, 0, 3, 2, 2, 0, 1, 1, 0, 0, 0, 2, 1, 1, 0, 3, 1, 2, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1,
    0, 3, 0, 3, 1, 2, 3, 3, 0, 3, 2, 0, 0, 2, 0, 2, 2, 0, 1, 0, 1, 0, 0, 1, 0, 2, 0, 2, 1, 0, 1, 1, 1, 0, 1, 0, 3, 0, 0, 1, 1, 2, 0, 0, 2, 0, 2, 2, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 0, 2, 0, 2, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 1, 1, 2, 2, 0, 3, 2, 1, 1, 2, 2, 0, 0, 1, 2, 1, 0, 2, 2, 1, 1, 2, 2, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1,
    0, 0, 3, 0, 3, 0, 3, 0, 2, 0, 2, 3, 2, 0, 3, 2, 1, 0, 0, 1, 0, 1, 1, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 0, 0, 1, 3, 1, 2, 0, 2, 0, 2, 1, 0, 1, 2, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 0, 3, 0, 3, 0, 3, 0, 1, 0, 3, 0, 0, 0, 2, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 0, 1, 0, 2, 0, 0, 0, 2, 0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 2, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 2, 1, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 1, 0, 2, 2, 0, 2, 2, 1, 0, 1, 2, 0, 0, 0, 2, 1, 0, 0, 2, 1, 2, 0, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 3, 2, 0, 3, 1, 0, 0, 2, 0, 0, 0, 1, 1, 2, 0, 0, 1, 0, 0, 2, 2, 2, 3, 0, 2, 2, 1, 1, 1, 0, 0, 0, 2, 1, 1, 0, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 2, 2, 1, 3, 2, 0, 2, 2, 0, 0, 1, 3, 0, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 2, 2, 3, 2, 1, 2, 1, 0, 0, 0, 2, 0, 2, 2, 0, 1, 0, 0, 1, 0, 0, 2, 2, 2, 2, 0, 3, 2, 2, 0, 2, 0, 0, 0, 1, 1, 2, 1, 0, 2, 2, 2, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 2, 2, 0, 2, 0, 3, 0, 2, 2, 2, 0, 0, 0, 2, 0, 0, 0, 0, 1, 1, 0, 0, 2, 2, 2, 2, 2, 1, 2, 2, 1, 2, 0, 0, 0, 0, 2, 2, 0, 2, 0, 0, 2, 2, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0,
    0, 3, 0, 3, 0, 3, 2, 3, 0, 2, 2, 0, 0, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 1, 0, 0, 1, 1, 1, 2, 1, 2, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 0, 3, 0, 2, 2, 2, 0, 3, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 1, 1, 2, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 3, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 1, 2, 2, 0, 0, 3, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 0, 2, 1, 2, 2, 2, 0, 0, 0, 0, 1, 2, 2, 0, 2, 0, 1, 1, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1,
    0, 0, 1, 0, 2, 0, 2, 0, 1, 0, 2, 2, 2, 0, 1, 2, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2, 2, 0, 2, 0, 2, 2, 0, 2, 0, 0, 0, 2, 1, 2, 1, 1, 0, 2, 1, 2, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 0, 2, 0, 3, 0, 2, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 0, 0, 2, 0, 2, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 3, 0, 2, 0, 0, 0, 0, 2, 2, 0, 0, 1, 3, 2, 1, 3, 0, 0, 0, 0, 2, 1, 0, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 0, 3, 0, 3, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 0, 2, 0, 2, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 2, 0, 2, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 0, 2, 0, 1, 0, 3, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 3, 0, 2, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 3, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 0, 2, 2, 1, 0, 2, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 0, 2, 0, 2, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP775_LATVIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 44, 46, 40, 43, 45, 42, 52, 30, 51, 33, 39, 32, 26, 47,
    25, 100, 34, 27, 31, 49, 38, 101, 102, 103, 53, 253, 253, 253, 253, 253,
    253, 1, 22, 24, 14, 5, 29, 21, 41, 3, 18, 11, 10, 12, 8, 9,
    15, 104, 6, 2, 4, 7, 16, 105, 106, 107, 19, 253, 253, 253, 253, 251,
    108, 109, 110, 13, 111, 54, 112, 113, 114, 17, 115, 116, 20, 117, 118, 119,
    120, 121, 122, 123, 124, 64, 253, 125, 126, 127, 128, 129, 253, 130, 253, 253,
    63, 59, 131, 132, 133, 134, 253, 253, 253, 253, 253, 252, 252, 135, 253, 253,
    253, 253, 253, 253, 253, 136, 58, 137, 138, 253, 253, 253, 253, 139, 55, 253,
    253, 253, 253, 253, 253, 253, 140, 65, 253, 253, 253, 253, 253, 253, 253, 66,
    141, 56, 142, 143, 144, 23, 145, 35, 48, 253, 253, 253, 253, 253, 253, 253,
    146, 147, 148, 149, 150, 151, 152, 153, 60, 50, 61, 36, 37, 57, 62, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP775_LATVIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP775",
    language: "Latvian",
    char_to_order_map: &CP775_LATVIAN_CHAR_TO_ORDER,
    language_model: &LATVIAN_LANG_MODEL,
    typical_positive_ratio: 0.953658,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_13_LATVIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 44, 46, 40, 43, 45, 42, 52, 30, 51, 33, 39, 32, 26, 47,
    25, 100, 34, 27, 31, 49, 38, 101, 102, 103, 53, 253, 253, 253, 253, 253,
    253, 1, 22, 24, 14, 5, 29, 21, 41, 3, 18, 11, 10, 12, 8, 9,
    15, 104, 6, 2, 4, 7, 16, 105, 106, 107, 19, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 108, 253, 109, 253, 253, 251, 253, 110,
    253, 253, 252, 252, 253, 111, 253, 253, 112, 252, 113, 253, 252, 252, 252, 114,
    115, 116, 63, 117, 118, 119, 120, 57, 58, 121, 122, 123, 64, 60, 59, 61,
    55, 124, 62, 125, 126, 127, 128, 253, 129, 130, 131, 65, 132, 133, 66, 134,
    135, 136, 13, 137, 138, 139, 140, 17, 56, 141, 142, 143, 54, 50, 20, 36,
    23, 144, 37, 145, 146, 147, 148, 253, 149, 150, 151, 35, 152, 153, 48, 253,
];

pub(crate) static ISO_8859_13_LATVIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-13",
    language: "Latvian",
    char_to_order_map: &ISO_8859_13_LATVIAN_CHAR_TO_ORDER,
    language_model: &LATVIAN_LANG_MODEL,
    typical_positive_ratio: 0.953658,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_4_LATVIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 44, 46, 40, 43, 45, 42, 52, 30, 51, 33, 39, 32, 26, 47,
    25, 100, 34, 27, 31, 49, 38, 101, 102, 103, 53, 253, 253, 253, 253, 253,
    253, 1, 22, 24, 14, 5, 29, 21, 41, 3, 18, 11, 10, 12, 8, 9,
    15, 104, 6, 2, 4, 7, 16, 105, 106, 107, 19, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 108, 109, 110, 253, 111, 61, 253, 253, 55, 57, 64, 112, 251, 66, 253,
    253, 113, 253, 114, 253, 115, 36, 116, 253, 23, 17, 54, 117, 118, 48, 119,
    63, 120, 121, 122, 123, 124, 125, 126, 58, 127, 128, 129, 130, 131, 132, 59,
    133, 62, 134, 60, 135, 136, 137, 253, 138, 139, 140, 141, 142, 143, 65, 144,
    13, 145, 146, 147, 148, 149, 150, 151, 56, 152, 153, 154, 155, 156, 157, 20,
    158, 37, 159, 50, 160, 161, 162, 253, 163, 164, 165, 166, 167, 168, 35, 253,
];

pub(crate) static ISO_8859_4_LATVIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-4",
    language: "Latvian",
    char_to_order_map: &ISO_8859_4_LATVIAN_CHAR_TO_ORDER,
    language_model: &LATVIAN_LANG_MODEL,
    typical_positive_ratio: 0.953658,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1257_LATVIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 44, 46, 40, 43, 45, 42, 52, 30, 51, 33, 39, 32, 26, 47,
    25, 100, 34, 27, 31, 49, 38, 101, 102, 103, 53, 253, 253, 253, 253, 253,
    253, 1, 22, 24, 14, 5, 29, 21, 41, 3, 18, 11, 10, 12, 8, 9,
    15, 104, 6, 2, 4, 7, 16, 105, 106, 107, 19, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 255, 253, 255, 253, 108, 253,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 255, 253, 255, 253, 253, 255,
    253, 255, 253, 253, 253, 255, 253, 253, 109, 253, 110, 253, 253, 251, 253, 111,
    253, 253, 252, 252, 253, 112, 253, 253, 113, 252, 114, 253, 252, 252, 252, 115,
    116, 117, 63, 118, 119, 120, 121, 57, 58, 122, 123, 124, 64, 60, 59, 61,
    55, 125, 62, 126, 127, 128, 129, 253, 130, 131, 132, 65, 133, 134, 66, 135,
    136, 137, 13, 138, 139, 140, 141, 17, 56, 142, 143, 144, 54, 50, 20, 36,
    23, 145, 37, 146, 147, 148, 149, 253, 150, 151, 152, 35, 153, 154, 48, 253,
];

pub(crate) static WINDOWS_1257_LATVIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1257",
    language: "Latvian",
    char_to_order_map: &WINDOWS_1257_LATVIAN_CHAR_TO_ORDER,
    language_model: &LATVIAN_LANG_MODEL,
    typical_positive_ratio: 0.953658,
    keep_ascii_letters: false,
    reversed: false,
};
