// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static HUNGARIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 0, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 1, 3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 0, 3, 3, 2, 1, 1, 0, 1, 0, 0, 1, 0, 3, 1, 0, 0, 1, 0, 1, 0, 1, 3, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 3, 3, 3, 3, 2, 2, 3, 3, 3, 1, 2, 3, 2, 0, 1, 0, 1, 0, 1, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 1, 3, 3, 3, 1, 1, 0, 1, 1, 0, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 3, 2, 3, 3, 2, 3, 2, 2, 3, 2, 3, 2, 3, 3, 2, 0, 2, 3, 3, 1, 1, 0, 1, 0, 0, 1, 1, 2, 1, 1, 1, 1, 0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 0, 3, 3, 3, 0, 1, 0, 1, 0, 1, 1, 0, 2, 1, 0, 0, 1, 1, 0, 1, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 2, 2, 3, 3, 1, 3, 1, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 3, 1, 0, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 1, 3, 2, 3, 2, 2, 1, 3, 3, 3, 1, 2, 1, 2, 3, 3, 1, 3, 0, 3, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 2, 3, 3, 2, 0, 1, 1, 3, 3, 0, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 3, 3, 3, 3, 3, 0, 2, 3, 3, 0, 3, 1, 3, 3, 2, 3, 3, 2, 2, 3, 3, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 3, 3, 3, 2, 3, 3, 3, 0, 2, 1, 3, 2, 3, 3, 1, 2, 2, 2, 3, 0, 2, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 3, 3, 3, 0, 1, 3, 3, 0, 3, 0, 3, 3, 3, 2, 3, 0, 3, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 2, 3, 3, 3, 1, 2, 3, 3, 2, 1, 3, 3, 2, 3, 0, 2, 3, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 1, 1, 1, 3, 3, 1, 0, 3, 1, 3, 1, 2, 1, 1, 2, 3, 1, 1, 2, 1, 2, 2, 0, 1, 3, 3, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 2, 3, 2, 3, 3, 2, 3, 3, 2, 3, 1, 3, 2, 2, 3, 3, 2, 1, 3, 1, 3, 3, 0, 2, 3, 2, 0, 1, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 2, 3, 2, 3, 3, 3, 2, 1, 3, 1, 2, 1, 3, 1, 3, 2, 3, 1, 1, 2, 1, 2, 3, 0, 2, 3, 1, 0, 1, 0, 1, 0, 0, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 1, 1, 1, 3, 3, 0, 0, 3, 2, 2, 1, 1, 1, 1, 2, 3, 1, 1, 1, 1, 3, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 2, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 2, 2, 3, 1, 2, 3, 0, 3, 2, 3, 3, 1, 1, 3, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 1, 3, 1, 3, 1, 2, 2, 1, 2, 3, 3, 3, 2, 2, 3, 1, 0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 2, 3, 3, 3, 0, 1, 1, 2, 1, 1, 1, 2, 3, 2, 1, 2, 0, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 1, 2, 3, 2, 1, 2, 3, 1, 2, 1, 1, 3, 1, 0, 2, 1, 2, 1, 0, 1, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 2, 1, 3, 3, 3, 0, 0, 3, 0, 2, 1, 0, 1, 1, 1, 3, 1, 1, 1, 3, 0, 2, 0, 2, 1, 3, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 2, 3, 3, 3, 0, 0, 1, 2, 0, 3, 0, 2, 3, 0, 1, 0, 0, 3, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 3, 3, 3, 3, 1, 3, 3, 2, 1, 2, 1, 2, 2, 3, 3, 2, 1, 2, 1, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 1, 3, 2, 2, 0, 1, 2, 3, 0, 2, 0, 1, 1, 2, 2, 0, 2, 2, 1, 1, 1, 0, 0, 1, 0, 0, 0, 2, 2, 0, 3, 2, 2, 2, 3, 0, 3, 1, 0, 2, 1, 2, 1, 2, 0, 0, 1, 1, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 3, 3, 3, 3, 3, 0, 1, 2, 3, 0, 3, 0, 2, 3, 2, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 3, 3, 2, 3, 1, 2, 3, 3, 2, 1, 1, 1, 3, 3, 3, 2, 1, 2, 1, 2, 2, 1, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 2, 2, 3, 2, 3, 0, 1, 3, 3, 0, 0, 0, 3, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 0, 1, 1, 1, 2, 2, 1, 3, 1, 1, 1, 0, 2, 0, 0, 2, 2, 2, 2, 0, 0, 0, 0, 2, 0, 0, 1, 2, 2, 2, 1, 1, 1, 1, 2, 1, 1, 1, 2, 1, 2, 2, 3, 2, 0, 1, 1, 1, 1, 2, 0, 3, 1, 1, 0, 1, 2, 0, 0, 0,
    0, 3, 2, 0, 1, 1, 1, 3, 2, 2, 0, 0, 2, 0, 1, 0, 1, 0, 0, 1, 2, 0, 1, 0, 0, 1, 0, 3, 2, 0, 1, 2, 2, 3, 1, 2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 1, 2, 1, 0, 2, 1, 2, 2, 2, 0, 1, 2, 2, 1, 1, 1, 1, 1, 0,
    0, 1, 1, 1, 2, 3, 2, 2, 0, 1, 1, 3, 0, 2, 0, 3, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 2, 3, 1, 2, 3, 2, 2, 3, 0, 1, 2, 0, 1, 1, 3, 2, 1, 0, 1, 2, 1, 1, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 0, 1, 0, 2, 3, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 2, 2, 2, 2, 1, 2, 2, 1, 0, 1, 1, 1, 3, 2, 2, 2, 0, 0, 2, 1, 2, 1, 3, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0,
    0, 3, 3, 0, 0, 0, 0, 1, 2, 2, 0, 1, 2, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 2, 0, 0, 0, 2, 2, 2, 1, 2, 1, 2, 1, 0, 1, 2, 2, 2, 2, 0, 2, 2, 0, 2, 2, 2, 1, 1, 1, 2, 3, 1, 1, 1, 1, 1, 0, 0,
    0, 2, 3, 1, 0, 1, 0, 1, 2, 3, 1, 0, 1, 0, 2, 1, 0, 0, 1, 1, 2, 0, 0, 0, 0, 1, 1, 3, 3, 0, 1, 2, 2, 2, 0, 1, 1, 1, 1, 0, 2, 1, 1, 1, 2, 0, 2, 1, 0, 0, 1, 2, 1, 1, 0, 0, 1, 1, 2, 0, 0, 1, 0, 0,
    0, 3, 3, 0, 2, 0, 1, 0, 2, 3, 0, 0, 2, 1, 2, 0, 0, 0, 0, 1, 2, 0, 1, 0, 0, 0, 1, 2, 1, 0, 0, 1, 2, 3, 1, 2, 1, 1, 1, 0, 2, 1, 1, 1, 3, 0, 2, 1, 1, 2, 1, 1, 1, 2, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0,
    0, 3, 2, 0, 0, 0, 0, 1, 2, 1, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 3, 1, 0, 0, 2, 3, 3, 1, 3, 1, 2, 2, 1, 1, 2, 1, 2, 2, 2, 2, 1, 0, 2, 1, 2, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0,
    0, 0, 1, 3, 3, 3, 1, 2, 0, 0, 1, 2, 0, 1, 0, 2, 1, 1, 1, 0, 0, 1, 2, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 1, 2, 0, 3, 2, 1, 1, 0, 2, 0, 2, 0, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 2, 2, 2, 2, 2, 1, 2, 2, 0, 1, 1, 1, 3, 2, 2, 2, 1, 0, 0, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 1, 0, 2, 3, 2, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 0, 1, 2, 0, 1, 2, 0, 2, 0, 0, 3, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 0, 0, 1, 2, 3, 0, 0, 2, 0, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 1, 1, 2, 0, 0, 0, 1, 2, 2, 1, 0, 0, 1, 0, 1, 1, 1, 2, 1, 2, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 2, 3, 1, 0, 1, 3, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 3, 2, 1, 1, 1, 2, 1, 1, 0, 1, 1, 1, 1, 2, 1, 2, 1, 0, 0, 2, 1, 1, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 2, 1, 2, 2, 1, 0, 2, 1, 0, 1, 0, 2, 0, 2, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 2, 1, 1, 2, 2, 1, 2, 1, 0, 2, 3, 0, 1, 1, 2, 2, 2, 0, 0, 2, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 2, 2, 1, 1, 1, 2, 2, 2, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 2, 0, 1, 1, 1, 0, 0, 2, 2, 0, 1, 2, 2, 2, 2, 1, 1, 1, 2, 0, 2, 1, 1, 1, 2, 0, 1, 1, 0, 0, 1, 2, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 1, 2, 1, 2, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 2, 1, 0, 1, 0, 0, 1, 0, 0, 0, 2, 2, 0, 2, 3, 2, 2, 3, 0, 2, 2, 1, 2, 0, 2, 1, 1, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 2, 0, 2, 2, 2, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 3, 0, 0, 1, 0, 0, 0, 2, 0, 1, 0, 1, 1, 2, 0, 1, 0, 2, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 2, 0, 0, 1, 1, 0, 0, 0,
    0, 1, 0, 1, 2, 2, 2, 2, 0, 1, 3, 2, 0, 1, 0, 0, 3, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 2, 2, 1, 2, 2, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 1, 0, 1, 2, 2, 0, 1, 1, 0, 2, 0, 2, 0, 1, 1, 1, 0, 0, 1, 0, 1, 1, 2, 0, 1, 0, 1, 1, 2, 2, 1, 1, 1, 1, 0, 1, 1, 1, 1, 2, 1, 2, 1, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0,
    0, 0, 0, 1, 1, 1, 2, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 2, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 2, 2, 2, 2, 1, 2, 2, 0, 1, 1, 1, 1, 2, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 0, 0, 1, 1, 2, 0, 0, 2, 1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 2, 1, 0, 0, 0, 2, 2, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 2, 1, 0, 2, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0,
    0, 0, 0, 0, 2, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 2, 2, 2, 1, 2, 0, 1, 0, 0, 1, 1, 2, 0, 1, 0, 0, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 0, 1, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 2, 1, 3, 0, 0, 1, 1, 2, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 1, 0, 2, 0, 1, 0, 0, 3, 1, 0, 1, 2, 0, 1, 2, 0, 2, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 2, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 2, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP852_HUNGARIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 47, 43, 50, 33, 41, 45, 42, 44, 54, 36, 35, 37, 34, 46,
    40, 100, 38, 31, 32, 51, 52, 101, 102, 103, 55, 253, 253, 253, 253, 253,
    253, 2, 18, 22, 17, 1, 24, 15, 19, 9, 23, 10, 5, 13, 6, 8,
    21, 104, 7, 4, 3, 20, 16, 105, 106, 107, 11, 253, 253, 253, 253, 251,
    108, 30, 14, 109, 110, 111, 112, 113, 114, 115, 60, 29, 116, 117, 118, 119,
    53, 120, 121, 122, 28, 123, 124, 125, 126, 58, 61, 127, 128, 129, 253, 130,
    12, 25, 26, 39, 131, 132, 133, 134, 135, 136, 253, 137, 138, 139, 253, 253,
    253, 253, 253, 253, 253, 49, 140, 141, 142, 253, 253, 253, 253, 143, 144, 253,
    253, 253, 253, 253, 253, 253, 145, 146, 253, 253, 253, 253, 253, 253, 253, 253,
    147, 148, 149, 150, 151, 152, 57, 153, 154, 253, 253, 253, 253, 155, 156, 253,
    56, 157, 158, 159, 160, 161, 162, 163, 164, 59, 165, 62, 166, 167, 168, 253,
    251, 253, 253, 169, 253, 253, 253, 253, 253, 253, 253, 48, 170, 171, 253, 253,
];

pub(crate) static CP852_HUNGARIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP852",
    language: "Hungarian",
    char_to_order_map: &CP852_HUNGARIAN_CHAR_TO_ORDER,
    language_model: &HUNGARIAN_LANG_MODEL,
    typical_positive_ratio: 0.941973,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_16_HUNGARIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 47, 43, 50, 33, 41, 45, 42, 44, 54, 36, 35, 37, 34, 46,
    40, 100, 38, 31, 32, 51, 52, 101, 102, 103, 55, 253, 253, 253, 253, 253,
    253, 2, 18, 22, 17, 1, 24, 15, 19, 9, 23, 10, 5, 13, 6, 8,
    21, 104, 7, 4, 3, 20, 16, 105, 106, 107, 11, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 108, 109, 110, 253, 253, 111, 253, 112, 253, 113, 253, 114, 251, 115, 116,
    253, 253, 117, 118, 119, 253, 253, 253, 120, 121, 122, 253, 123, 124, 125, 126,
    127, 49, 128, 129, 130, 131, 132, 133, 134, 53, 135, 136, 137, 57, 138, 139,
    140, 141, 142, 56, 143, 60, 58, 144, 62, 145, 59, 146, 61, 147, 148, 149,
    150, 12, 151, 152, 153, 154, 155, 156, 157, 14, 158, 159, 160, 25, 161, 162,
    163, 164, 165, 26, 166, 29, 28, 167, 48, 168, 39, 169, 30, 170, 171, 172,
];

pub(crate) static ISO_8859_16_HUNGARIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-16",
    language: "Hungarian",
    char_to_order_map: &ISO_8859_16_HUNGARIAN_CHAR_TO_ORDER,
    language_model: &HUNGARIAN_LANG_MODEL,
    typical_positive_ratio: 0.941973,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_2_HUNGARIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 47, 43, 50, 33, 41, 45, 42, 44, 54, 36, 35, 37, 34, 46,
    40, 100, 38, 31, 32, 51, 52, 101, 102, 103, 55, 253, 253, 253, 253, 253,
    253, 2, 18, 22, 17, 1, 24, 15, 19, 9, 23, 10, 5, 13, 6, 8,
    21, 104, 7, 4, 3, 20, 16, 105, 106, 107, 11, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 108, 253, 109, 253, 110, 111, 253, 253, 112, 113, 114, 115, 251, 116, 117,
    253, 118, 253, 119, 253, 120, 121, 122, 253, 123, 124, 125, 126, 253, 127, 128,
    129, 49, 130, 131, 132, 133, 134, 135, 136, 53, 137, 138, 139, 57, 140, 141,
    142, 143, 144, 56, 145, 60, 58, 253, 146, 147, 59, 62, 61, 148, 149, 150,
    151, 12, 152, 153, 154, 155, 156, 157, 158, 14, 159, 160, 161, 25, 162, 163,
    164, 165, 166, 26, 167, 29, 28, 253, 168, 169, 39, 48, 30, 170, 171, 253,
];

pub(crate) static ISO_8859_2_HUNGARIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-2",
    language: "Hungarian",
    char_to_order_map: &ISO_8859_2_HUNGARIAN_CHAR_TO_ORDER,
    language_model: &HUNGARIAN_LANG_MODEL,
    typical_positive_ratio: 0.941973,
    keep_ascii_letters: false,
    reversed: false,
};

static MACLATIN2_HUNGARIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 47, 43, 50, 33, 41, 45, 42, 44, 54, 36, 35, 37, 34, 46,
    40, 100, 38, 31, 32, 51, 52, 101, 102, 103, 55, 253, 253, 253, 253, 253,
    253, 2, 18, 22, 17, 1, 24, 15, 19, 9, 23, 10, 5, 13, 6, 8,
    21, 104, 7, 4, 3, 20, 16, 105, 106, 107, 11, 253, 253, 253, 253, 251,
    108, 109, 110, 53, 111, 58, 61, 12, 112, 113, 114, 115, 116, 117, 14, 118,
    119, 120, 25, 121, 122, 123, 124, 26, 125, 126, 28, 127, 39, 128, 129, 30,
    253, 253, 130, 253, 253, 253, 253, 131, 253, 253, 253, 132, 253, 253, 133, 134,
    135, 136, 253, 253, 137, 138, 253, 253, 139, 140, 141, 142, 143, 144, 145, 146,
    147, 148, 253, 253, 149, 150, 253, 253, 253, 253, 253, 151, 60, 152, 29, 153,
    253, 253, 253, 253, 253, 253, 253, 253, 154, 155, 156, 157, 253, 253, 158, 159,
    160, 161, 253, 253, 162, 163, 164, 49, 165, 166, 57, 167, 168, 169, 56, 170,
    171, 172, 59, 173, 62, 48, 174, 175, 176, 177, 178, 179, 180, 181, 182, 183,
];

pub(crate) static MACLATIN2_HUNGARIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacLatin2",
    language: "Hungarian",
    char_to_order_map: &MACLATIN2_HUNGARIAN_CHAR_TO_ORDER,
    language_model: &HUNGARIAN_LANG_MODEL,
    typical_positive_ratio: 0.941973,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1250_HUNGARIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 47, 43, 50, 33, 41, 45, 42, 44, 54, 36, 35, 37, 34, 46,
    40, 100, 38, 31, 32, 51, 52, 101, 102, 103, 55, 253, 253, 253, 253, 253,
    253, 2, 18, 22, 17, 1, 24, 15, 19, 9, 23, 10, 5, 13, 6, 8,
    21, 104, 7, 4, 3, 20, 16, 105, 106, 107, 11, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 108, 253, 109, 110, 111, 112,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 113, 253, 114, 115, 116, 117,
    253, 118, 253, 119, 253, 120, 253, 253, 253, 253, 121, 253, 253, 251, 253, 122,
    253, 253, 253, 123, 253, 124, 253, 253, 253, 125, 126, 253, 127, 253, 128, 129,
    130, 49, 131, 132, 133, 134, 135, 136, 137, 53, 138, 139, 140, 57, 141, 142,
    143, 144, 145, 56, 146, 60, 58, 253, 147, 148, 59, 62, 61, 149, 150, 151,
    152, 12, 153, 154, 155, 156, 157, 158, 159, 14, 160, 161, 162, 25, 163, 164,
    165, 166, 167, 26, 168, 29, 28, 253, 169, 170, 39, 48, 30, 171, 172, 253,
];

pub(crate) static WINDOWS_1250_HUNGARIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1250",
    language: "Hungarian",
    char_to_order_map: &WINDOWS_1250_HUNGARIAN_CHAR_TO_ORDER,
    language_model: &HUNGARIAN_LANG_MODEL,
    typical_positive_ratio: 0.941973,
    keep_ascii_letters: false,
    reversed: false,
};
