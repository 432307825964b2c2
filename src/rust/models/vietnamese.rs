// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static VIETNAMESE_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 2, 3, 3, 2, 3, 3, 3, 2, 2, 2, 1, 3, 1, 3, 1, 1, 1, 1, 1, 2, 1, 0, 0, 0, 1, 0, 1, 0, 2, 0, 1, 2, 0, 1, 1, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 3, 1, 1, 3, 2, 3, 3, 1, 2, 1, 1, 2, 2, 3, 2, 1, 2, 3, 3, 1, 1, 3, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 3, 1, 0, 3, 1, 1, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 1, 3, 2, 2, 1, 0, 1, 1, 2, 1, 1, 0, 2, 1, 2, 1, 2, 2, 0, 2, 1, 1, 1, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 3, 3, 3, 2, 3, 0, 3, 3, 3, 3, 2, 3, 3, 3, 1, 1, 0, 3, 1, 3, 0, 3, 1, 0, 0, 2, 2, 0, 0, 0, 0, 1, 0, 2, 3, 0, 0, 2, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 2, 2, 3, 3, 3, 3, 0, 3, 2, 3, 2, 3, 3, 2, 2, 1, 3, 2, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 3, 1, 0, 3, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 0, 3, 2, 3, 3, 1, 3, 2, 1, 2, 3, 3, 1, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 2, 1, 2, 1, 0, 2, 1, 1, 1, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 0, 0, 3, 0, 0, 1, 3, 1, 0, 0, 1, 2, 0, 0, 0, 1, 0, 1, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 2, 3, 3, 3, 3, 3, 1, 2, 3, 2, 2, 2, 1, 2, 2, 1, 1, 0, 2, 1, 2, 2, 1, 1, 1, 1, 1, 2, 2, 1, 1, 2, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 3, 3, 3, 1, 2, 0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 1, 2, 1, 2, 1, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 0, 3, 0, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 3, 0, 0, 3, 0, 3, 3, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 3, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 3, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 3, 3, 3, 2, 3, 3, 3, 3, 0, 3, 3, 3, 2, 3, 3, 3, 2, 2, 2, 0, 1, 0, 2, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 2, 1, 3, 3, 3, 3, 0, 1, 3, 3, 2, 1, 3, 3, 2, 3, 3, 3, 2, 1, 3, 0, 3, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 2, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 2, 1, 3, 3, 3, 3, 0, 2, 3, 3, 3, 2, 3, 2, 3, 1, 3, 2, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 1, 3, 3, 3, 3, 3, 0, 2, 2, 1, 1, 0, 3, 1, 1, 2, 1, 0, 0, 2, 3, 2, 0, 0, 1, 1, 2, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 3, 3, 3, 2, 3, 1, 3, 3, 3, 3, 2, 3, 3, 3, 3, 0, 0, 3, 1, 1, 2, 3, 0, 1, 1, 1, 2, 1, 1, 0, 0, 2, 2, 2, 0, 1, 1, 0, 2, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 2, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2, 3, 3, 2, 2, 0, 3, 2, 1, 1, 1, 2, 0, 1, 1, 1, 0, 1, 2, 0, 0, 0, 1, 0, 2, 1, 1, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 2, 2, 3, 3, 3, 3, 0, 3, 2, 3, 2, 1, 3, 1, 2, 3, 2, 2, 1, 1, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2, 0, 1, 0, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 2, 1, 2, 2, 3, 1, 1, 0, 2, 3, 2, 3, 1, 2, 1, 2, 1, 0, 0, 0, 0, 3, 2, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 3, 1, 2, 1, 0, 0, 0, 2, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 0, 0, 3, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 3, 2, 1, 3, 2, 2, 3, 0, 1, 1, 1, 2, 0, 3, 2, 1, 0, 3, 3, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 2, 3, 2, 0, 3, 1, 3, 3, 0, 3, 0, 0, 0, 0, 3, 0, 0, 3, 2, 2, 1, 3, 3, 3, 0, 2, 3, 2, 3, 1, 3, 3, 1, 2, 2, 2, 0, 3, 2, 3, 0, 3, 3, 2, 3, 1, 2, 1, 2, 0, 3, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 0, 0, 1, 0, 0, 3, 0, 1, 1, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 2, 1, 1, 0, 3, 0, 3, 3, 0, 2, 1, 2, 0, 0, 1, 0, 0, 1, 3, 0, 0, 2, 0, 2, 0, 2, 3, 3, 2, 1, 2, 3, 1, 0, 2, 3, 0, 2, 3, 3, 2, 2, 3, 2, 3, 2, 2, 2, 0, 2, 0, 0, 2, 2, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 3, 3, 1, 3, 1, 3, 3, 0, 1, 3, 1, 2, 1, 3, 1, 2, 2, 2, 1, 0, 0, 2, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 2, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 3, 0, 3, 3, 0, 2, 2, 0, 1, 0, 0, 0, 1, 2, 1, 1, 1, 0, 3, 0, 3, 2, 2, 0, 2, 3, 1, 2, 1, 1, 2, 0, 3, 2, 2, 0, 2, 2, 2, 1, 2, 0, 3, 2, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 3, 1, 0, 3, 0, 2, 3, 0, 1, 0, 0, 1, 0, 2, 0, 0, 2, 2, 2, 0, 3, 1, 1, 0, 1, 2, 0, 1, 1, 1, 3, 2, 1, 1, 1, 0, 0, 2, 2, 0, 3, 1, 3, 3, 0, 0, 1, 0, 0, 0, 3, 2, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 1, 3, 0, 0, 2, 0, 2, 2, 0, 1, 0, 0, 0, 0, 2, 0, 1, 1, 2, 0, 0, 1, 2, 2, 0, 0, 3, 0, 2, 1, 0, 3, 0, 1, 0, 2, 0, 0, 1, 1, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 2, 0, 1, 3, 1, 2, 3, 0, 3, 0, 3, 0, 1, 2, 0, 0, 1, 1, 0, 2, 2, 2, 3, 0, 3, 3, 2, 2, 1, 3, 3, 0, 2, 2, 3, 1, 0, 2, 3, 1, 3, 3, 2, 3, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 0, 0, 3, 0, 3, 2, 0, 2, 0, 2, 0, 0, 3, 0, 0, 1, 2, 1, 0, 3, 2, 2, 0, 1, 1, 0, 1, 1, 2, 3, 0, 1, 2, 2, 0, 1, 1, 2, 1, 2, 2, 2, 2, 0, 2, 0, 2, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 0, 1, 3, 1, 3, 3, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 1, 2, 1, 2, 2, 2, 0, 1, 1, 0, 2, 1, 3, 2, 0, 0, 2, 3, 0, 0, 2, 2, 2, 3, 2, 2, 3, 1, 1, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 0, 2, 1, 2, 1, 0, 0, 0, 2, 0, 2, 2, 0, 0, 3, 0, 0, 0, 0, 0, 2, 0, 3, 0, 3, 2, 1, 3, 2, 3, 2, 0, 2, 3, 3, 0, 0, 3, 2, 0, 2, 2, 0, 2, 3, 0, 2, 0, 1, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 0, 0, 3, 0, 1, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 3, 3, 0, 2, 0, 1, 1, 1, 2, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 2, 0, 1, 2, 1, 0, 1, 0, 0, 2, 0, 0, 0, 0, 2, 1, 0, 1, 2, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 1, 0, 3, 1, 2, 2, 0, 2, 0, 2, 0, 0, 3, 2, 0, 0, 1, 0, 0, 2, 0, 2, 0, 3, 2, 1, 3, 2, 2, 3, 0, 1, 2, 3, 0, 1, 2, 2, 1, 3, 2, 3, 2, 0, 1, 1, 0, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 3, 0, 0, 3, 3, 2, 3, 0, 0, 0, 0, 0, 1, 3, 0, 1, 0, 3, 0, 0, 2, 2, 1, 0, 2, 1, 1, 3, 1, 3, 3, 0, 1, 2, 2, 0, 1, 2, 3, 0, 3, 1, 1, 2, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 3, 2, 2, 0, 3, 0, 3, 3, 0, 1, 2, 1, 1, 1, 2, 0, 0, 2, 2, 1, 2, 3, 1, 3, 0, 2, 2, 2, 2, 2, 2, 3, 0, 2, 2, 3, 1, 1, 2, 2, 1, 3, 2, 2, 3, 2, 0, 2, 2, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 1, 3, 0, 0, 1, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1, 0, 3, 0, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 2, 0, 0, 3, 0, 2, 2, 0, 2, 0, 1, 0, 0, 2, 0, 1, 1, 0, 2, 3, 2, 0, 2, 0, 2, 1, 1, 2, 2, 2, 3, 1, 1, 2, 2, 0, 2, 2, 2, 0, 3, 2, 1, 2, 2, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 2, 2, 2, 0, 1, 2, 1, 0, 2, 2, 3, 2, 0, 0, 2, 2, 2, 0, 0, 0, 3, 0, 3, 1, 3, 0, 1, 3, 3, 3, 3, 0, 2, 2, 3, 0, 0, 3, 1, 0, 1, 3, 2, 2, 2, 0, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 3, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 1, 0, 1, 0, 2, 2, 0, 1, 2, 1, 2, 2, 0, 1, 2, 0, 0, 0, 0, 1, 3, 0, 2, 2, 3, 2, 1, 2, 1, 3, 2, 0, 3, 2, 3, 0, 0, 2, 3, 0, 2, 3, 1, 2, 3, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 2, 0, 0, 2, 0, 2, 2, 0, 1, 0, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 2, 1, 3, 1, 2, 0, 1, 2, 1, 3, 3, 0, 2, 3, 2, 1, 0, 1, 3, 0, 3, 2, 2, 3, 1, 0, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 2, 1, 1, 1, 1, 0, 0, 0, 2, 2, 1, 1, 1, 0, 1, 2, 2, 0, 0, 0, 3, 0, 2, 1, 3, 1, 2, 2, 1, 3, 3, 0, 1, 2, 3, 0, 0, 0, 1, 1, 2, 3, 0, 1, 1, 0, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 2, 0, 1, 2, 0, 0, 1, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 3, 0, 3, 0, 2, 1, 2, 2, 2, 2, 2, 0, 2, 3, 3, 0, 0, 2, 2, 0, 0, 3, 2, 2, 1, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 3, 1, 0, 3, 1, 3, 2, 0, 1, 0, 2, 0, 0, 3, 0, 1, 1, 2, 0, 0, 2, 2, 2, 0, 0, 1, 2, 2, 2, 2, 1, 0, 0, 2, 2, 0, 2, 1, 0, 0, 2, 1, 2, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 3, 0, 0, 2, 0, 2, 2, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1, 3, 1, 1, 1, 2, 0, 2, 0, 0, 2, 1, 1, 2, 0, 1, 2, 2, 0, 0, 2, 2, 2, 2, 2, 0, 1, 0, 3, 0, 0, 0, 0, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 1, 0, 0, 2, 0, 2, 1, 0, 0, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 0, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static WINDOWS_1258_VIETNAMESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 42, 32, 26, 41, 44, 100, 36, 29, 34, 101, 30, 33, 37, 28, 47,
    31, 52, 45, 38, 24, 46, 50, 102, 48, 51, 103, 253, 253, 253, 253, 253,
    253, 7, 19, 5, 18, 17, 104, 6, 2, 4, 105, 16, 14, 15, 1, 10,
    13, 39, 12, 8, 3, 9, 23, 106, 27, 20, 107, 253, 253, 253, 253, 251,
    253, 255, 253, 108, 253, 253, 253, 253, 109, 253, 255, 253, 110, 255, 255, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 255, 253, 111, 255, 255, 112,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 113, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 114, 253, 253, 253, 252, 115, 253, 252, 252, 252, 253,
    116, 117, 55, 58, 118, 119, 120, 121, 122, 123, 53, 124, 253, 125, 126, 127,
    35, 128, 253, 129, 56, 57, 130, 253, 131, 132, 133, 134, 135, 54, 253, 136,
    137, 138, 40, 49, 139, 140, 141, 142, 143, 144, 25, 145, 253, 146, 147, 148,
    11, 149, 253, 150, 21, 43, 151, 253, 152, 153, 154, 155, 156, 22, 253, 157,
];

pub(crate) static WINDOWS_1258_VIETNAMESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1258",
    language: "Vietnamese",
    char_to_order_map: &WINDOWS_1258_VIETNAMESE_CHAR_TO_ORDER,
    language_model: &VIETNAMESE_LANG_MODEL,
    typical_positive_ratio: 0.969126,
    keep_ascii_letters: false,
    reversed: false,
};
