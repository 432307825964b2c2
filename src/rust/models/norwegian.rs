// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static NORWEGIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 2, 0, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 2, 0, 1, 2, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 0, 0, 1, 1, 0, 0, 1, 0, 0, 3, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 2, 0, 1, 0, 1, 0, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 0, 0, 1, 0, 1, 0, 1, 3, 1, 2, 0, 0, 2, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 2, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 3, 0, 1, 1, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 1, 1, 1, 1, 1, 1, 1, 0, 3, 1, 0, 1, 0, 0, 0, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 0, 2, 1, 1, 1, 2, 0, 0, 0, 1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 1, 1, 1, 0, 0, 0, 1, 1, 1, 2, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 2, 2, 3, 3, 2, 2, 3, 1, 2, 2, 1, 1, 1, 0, 0, 0, 1, 0, 2, 0, 1, 0, 0, 0, 1, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 0, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 3, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 2, 3, 3, 2, 2, 2, 1, 2, 2, 0, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 2, 2, 2, 2, 3, 3, 3, 3, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 2, 3, 0, 2, 3, 2, 2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 3, 2, 3, 3, 2, 2, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 0, 3, 2, 1, 2, 3, 3, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 2, 2, 3, 2, 2, 2, 2, 1, 2, 2, 3, 1, 0, 3, 2, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 2, 3, 3, 0, 3, 2, 2, 1, 3, 1, 0, 3, 0, 3, 3, 2, 1, 3, 0, 0, 1, 1, 1, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 1, 3, 2, 3, 3, 2, 3, 2, 1, 1, 3, 1, 0, 1, 3, 3, 3, 2, 0, 2, 0, 1, 0, 0, 0, 0, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 3, 1, 3, 1, 2, 3, 2, 0, 2, 3, 0, 0, 0, 0, 0, 0, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 2, 2, 2, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 1, 3, 1, 3, 3, 0, 3, 2, 1, 1, 3, 3, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 2, 3, 1, 1, 3, 1, 0, 2, 3, 1, 3, 1, 1, 3, 1, 3, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 0, 3, 0, 3, 3, 0, 3, 3, 3, 0, 2, 3, 1, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 1, 3, 3, 3, 2, 0, 0, 1, 2, 3, 2, 0, 0, 2, 3, 1, 2, 2, 3, 3, 2, 3, 2, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 2, 2, 2, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 1, 3, 2, 3, 0, 0, 3, 0, 0, 0, 2, 0, 2, 0, 0, 2, 3, 0, 2, 2, 2, 3, 3, 3, 3, 3, 1, 2, 3, 1, 2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 2, 3, 1, 2, 1, 3, 2, 0, 3, 1, 2, 3, 2, 3, 2, 2, 0, 0, 0, 1, 0, 3, 3, 0, 2, 2, 1, 3, 3, 3, 2, 2, 3, 3, 2, 0, 2, 3, 2, 2, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 3, 0, 2, 0, 2, 3, 0, 3, 2, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 3, 2, 2, 2, 3, 2, 3, 3, 2, 2, 2, 2, 3, 3, 2, 2, 2, 2, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 3, 1, 3, 2, 0, 3, 0, 1, 0, 2, 0, 0, 0, 0, 2, 2, 1, 0, 3, 1, 2, 2, 3, 3, 2, 0, 2, 2, 0, 0, 2, 2, 2, 3, 1, 0, 0, 2, 2, 0, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 2, 3, 2, 2, 1, 2, 2, 0, 1, 2, 2, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 2, 3, 1, 2, 2, 1, 3, 3, 3, 1, 2, 2, 2, 2, 2, 3, 1, 2, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 1, 2, 1, 3, 0, 0, 3, 1, 1, 0, 2, 0, 0, 0, 0, 0, 2, 2, 0, 2, 2, 3, 3, 2, 2, 2, 2, 1, 0, 0, 2, 1, 3, 2, 2, 3, 1, 2, 3, 1, 2, 0, 1, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 1, 3, 0, 3, 1, 0, 2, 0, 1, 0, 2, 0, 2, 1, 0, 0, 2, 2, 0, 1, 2, 2, 2, 2, 2, 2, 2, 3, 0, 0, 0, 2, 2, 1, 2, 3, 0, 2, 2, 2, 2, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 0, 2, 0, 2, 0, 1, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 1, 1, 1, 3, 2, 2, 3, 2, 3, 2, 2, 2, 0, 2, 2, 2, 2, 3, 3, 1, 1, 3, 2, 1, 0, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 2, 2, 3, 2, 3, 3, 2, 1, 2, 2, 2, 0, 1, 2, 1, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 2, 3, 0, 3, 3, 1, 3, 0, 0, 0, 3, 0, 2, 0, 0, 2, 2, 0, 0, 1, 3, 2, 2, 2, 1, 3, 2, 1, 1, 0, 2, 2, 1, 0, 3, 0, 0, 2, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 2, 1, 3, 3, 0, 3, 0, 0, 0, 2, 1, 2, 0, 0, 0, 2, 1, 0, 0, 2, 2, 3, 3, 1, 3, 3, 2, 2, 0, 2, 3, 2, 2, 3, 2, 0, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 2, 0, 3, 2, 0, 2, 0, 0, 1, 3, 0, 0, 0, 1, 2, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 2, 2, 2, 0, 1, 2, 2, 2, 3, 2, 3, 2, 2, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 3, 2, 3, 0, 0, 3, 0, 0, 2, 2, 0, 0, 0, 0, 0, 2, 2, 1, 1, 2, 2, 3, 3, 2, 3, 2, 2, 2, 1, 0, 2, 2, 3, 2, 0, 0, 2, 1, 1, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 1, 0, 1, 0, 1, 1, 0, 1, 2, 3, 1, 3, 2, 2, 2, 0, 0, 0, 0, 0, 2, 2, 1, 0, 2, 2, 2, 2, 3, 0, 2, 2, 3, 3, 2, 2, 1, 2, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 2, 2, 1, 2, 2, 0, 2, 2, 0, 0, 2, 1, 0, 0, 0, 2, 2, 2, 2, 1, 2, 2, 2, 3, 2, 2, 3, 1, 2, 1, 0, 3, 2, 2, 2, 2, 1, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 1, 3, 0, 3, 0, 0, 2, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 3, 2, 0, 2, 3, 0, 1, 0, 0, 0, 2, 1, 1, 1, 1, 1, 0, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 3, 0, 3, 2, 0, 3, 0, 0, 0, 3, 0, 0, 0, 0, 0, 2, 2, 2, 0, 2, 1, 2, 1, 0, 2, 0, 2, 2, 0, 0, 1, 1, 2, 2, 1, 0, 2, 2, 2, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 2, 1, 2, 0, 2, 3, 1, 0, 3, 1, 0, 1, 2, 1, 2, 1, 0, 0, 1, 0, 3, 3, 0, 2, 2, 2, 2, 2, 2, 0, 2, 2, 0, 2, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 2, 0, 1, 1, 2, 1, 0, 3, 1, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 2, 0, 2, 2, 2, 2, 2, 2, 2, 2, 3, 0, 2, 2, 2, 2, 2, 0, 1, 1, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 0, 2, 0, 3, 0, 0, 3, 0, 0, 1, 2, 0, 3, 0, 0, 2, 2, 2, 0, 2, 2, 2, 2, 2, 1, 3, 0, 0, 1, 0, 1, 1, 1, 1, 2, 0, 2, 0, 2, 0, 2, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 0, 1, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 1, 0, 2, 1, 0, 0, 0, 1, 2, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1, 0, 1, 1, 0, 1, 1, 0, 2, 2, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 2, 0, 0, 1, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 2, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 2, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
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

static CP037_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 103, 104, 21, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 107, 108, 109, 110, 111, 112, 113, 114, 115, 253, 253, 253, 253, 253, 253,
    253, 253, 116, 117, 118, 119, 120, 49, 121, 122, 253, 253, 253, 253, 253, 253,
    23, 123, 124, 125, 126, 127, 128, 129, 130, 253, 253, 253, 253, 253, 253, 253,
    48, 7, 18, 33, 11, 1, 17, 12, 22, 5, 253, 253, 131, 132, 133, 253,
    253, 19, 9, 8, 13, 4, 10, 15, 134, 2, 135, 136, 45, 253, 50, 253,
    137, 253, 6, 3, 14, 16, 138, 139, 20, 140, 253, 253, 141, 142, 143, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 251, 144, 145, 146, 147, 148,
    253, 46, 34, 31, 37, 30, 38, 35, 149, 32, 252, 150, 151, 152, 153, 154,
    253, 253, 24, 25, 42, 40, 155, 156, 47, 157, 252, 158, 159, 160, 161, 162,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 163, 164, 165, 166, 251,
];

pub(crate) static CP037_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Norwegian",
    char_to_order_map: &CP037_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static CP500_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 103, 104, 21, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 107, 108, 109, 110, 111, 112, 113, 114, 115, 253, 253, 253, 253, 253, 253,
    253, 253, 116, 117, 118, 119, 120, 49, 121, 122, 253, 253, 253, 253, 253, 253,
    23, 123, 124, 125, 126, 127, 128, 129, 130, 253, 253, 253, 253, 253, 253, 253,
    48, 7, 18, 33, 11, 1, 17, 12, 22, 5, 253, 253, 131, 132, 133, 253,
    253, 19, 9, 8, 13, 4, 10, 15, 134, 2, 135, 136, 45, 253, 50, 253,
    137, 253, 6, 3, 14, 16, 138, 139, 20, 140, 253, 253, 141, 142, 143, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 251, 144, 145, 146, 147, 148,
    253, 46, 34, 31, 37, 30, 38, 35, 149, 32, 252, 150, 151, 152, 153, 154,
    253, 253, 24, 25, 42, 40, 155, 156, 47, 157, 252, 158, 159, 160, 161, 162,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 163, 164, 165, 166, 251,
];

pub(crate) static CP500_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Norwegian",
    char_to_order_map: &CP500_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static CP850_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 46, 34, 31, 37, 30, 38,
    35, 100, 32, 24, 25, 42, 40, 101, 102, 47, 103, 253, 253, 253, 253, 253,
    253, 7, 18, 33, 11, 1, 17, 12, 22, 5, 19, 9, 8, 13, 4, 10,
    15, 104, 2, 6, 3, 14, 16, 105, 106, 20, 107, 253, 253, 253, 253, 251,
    108, 109, 110, 111, 112, 113, 21, 114, 115, 116, 117, 118, 119, 120, 121, 49,
    122, 45, 50, 123, 124, 125, 126, 127, 128, 129, 130, 23, 253, 48, 253, 131,
    132, 133, 134, 135, 136, 137, 138, 139, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 140, 141, 142, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 143, 144, 253, 253, 253, 253, 253, 253, 253, 253,
    145, 146, 147, 148, 149, 150, 151, 152, 153, 253, 253, 253, 253, 253, 154, 253,
    155, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 168, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Norwegian",
    char_to_order_map: &CP850_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static CP858_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 46, 34, 31, 37, 30, 38,
    35, 100, 32, 24, 25, 42, 40, 101, 102, 47, 103, 253, 253, 253, 253, 253,
    253, 7, 18, 33, 11, 1, 17, 12, 22, 5, 19, 9, 8, 13, 4, 10,
    15, 104, 2, 6, 3, 14, 16, 105, 106, 20, 107, 253, 253, 253, 253, 251,
    108, 109, 110, 111, 112, 113, 21, 114, 115, 116, 117, 118, 119, 120, 121, 49,
    122, 45, 50, 123, 124, 125, 126, 127, 128, 129, 130, 23, 253, 48, 253, 131,
    132, 133, 134, 135, 136, 137, 138, 139, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 140, 141, 142, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 143, 144, 253, 253, 253, 253, 253, 253, 253, 253,
    145, 146, 147, 148, 149, 253, 150, 151, 152, 253, 253, 253, 253, 253, 153, 253,
    154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Norwegian",
    char_to_order_map: &CP858_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static CP865_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 46, 34, 31, 37, 30, 38,
    35, 100, 32, 24, 25, 42, 40, 101, 102, 47, 103, 253, 253, 253, 253, 253,
    253, 7, 18, 33, 11, 1, 17, 12, 22, 5, 19, 9, 8, 13, 4, 10,
    15, 104, 2, 6, 3, 14, 16, 105, 106, 20, 107, 253, 253, 253, 253, 251,
    108, 109, 110, 111, 112, 113, 21, 114, 115, 116, 117, 118, 119, 120, 121, 49,
    122, 45, 50, 123, 124, 125, 126, 127, 128, 129, 130, 23, 253, 48, 253, 131,
    132, 133, 134, 135, 136, 137, 138, 139, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    140, 141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 152, 153, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 154, 252, 253, 253,
];

pub(crate) static CP865_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP865",
    language: "Norwegian",
    char_to_order_map: &CP865_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_15_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 46, 34, 31, 37, 30, 38,
    35, 100, 32, 24, 25, 42, 40, 101, 102, 47, 103, 253, 253, 253, 253, 253,
    253, 7, 18, 33, 11, 1, 17, 12, 22, 5, 19, 9, 8, 13, 4, 10,
    15, 104, 2, 6, 3, 14, 16, 105, 106, 20, 107, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 108, 253, 109, 253, 110, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 111, 112, 253, 253, 113, 252, 114, 253, 115, 116, 117, 253,
    118, 119, 120, 121, 122, 49, 50, 123, 124, 125, 126, 127, 128, 129, 130, 131,
    132, 133, 134, 135, 136, 137, 138, 253, 48, 139, 140, 141, 142, 143, 144, 145,
    146, 147, 148, 149, 150, 21, 45, 151, 152, 153, 154, 155, 156, 157, 158, 159,
    160, 161, 162, 163, 164, 165, 166, 253, 23, 167, 168, 169, 170, 171, 172, 173,
];

pub(crate) static ISO_8859_15_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Norwegian",
    char_to_order_map: &ISO_8859_15_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_1_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 46, 34, 31, 37, 30, 38,
    35, 100, 32, 24, 25, 42, 40, 101, 102, 47, 103, 253, 253, 253, 253, 253,
    253, 7, 18, 33, 11, 1, 17, 12, 22, 5, 19, 9, 8, 13, 4, 10,
    15, 104, 2, 6, 3, 14, 16, 105, 106, 20, 107, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 108, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 109, 253, 253, 253, 252, 110, 253, 252, 252, 252, 253,
    111, 112, 113, 114, 115, 49, 50, 116, 117, 118, 119, 120, 121, 122, 123, 124,
    125, 126, 127, 128, 129, 130, 131, 253, 48, 132, 133, 134, 135, 136, 137, 138,
    139, 140, 141, 142, 143, 21, 45, 144, 145, 146, 147, 148, 149, 150, 151, 152,
    153, 154, 155, 156, 157, 158, 159, 253, 23, 160, 161, 162, 163, 164, 165, 166,
];

pub(crate) static ISO_8859_1_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Norwegian",
    char_to_order_map: &ISO_8859_1_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static MACROMAN_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 46, 34, 31, 37, 30, 38,
    35, 100, 32, 24, 25, 42, 40, 101, 102, 47, 103, 253, 253, 253, 253, 253,
    253, 7, 18, 33, 11, 1, 17, 12, 22, 5, 19, 9, 8, 13, 4, 10,
    15, 104, 2, 6, 3, 14, 16, 105, 106, 20, 107, 253, 253, 253, 253, 251,
    108, 49, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 21, 119, 120, 121,
    122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137,
    253, 253, 253, 253, 253, 253, 253, 138, 253, 253, 253, 253, 253, 253, 50, 48,
    253, 253, 253, 253, 253, 139, 253, 253, 253, 140, 253, 141, 142, 143, 45, 23,
    253, 253, 253, 253, 144, 253, 253, 253, 253, 253, 253, 145, 146, 147, 148, 149,
    253, 253, 253, 253, 253, 253, 253, 253, 150, 151, 253, 253, 253, 253, 152, 153,
    253, 253, 253, 253, 253, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164,
    251, 165, 166, 167, 168, 169, 170, 253, 253, 253, 253, 253, 253, 253, 253, 171,
];

pub(crate) static MACROMAN_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Norwegian",
    char_to_order_map: &MACROMAN_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1252_NORWEGIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 41, 43, 36, 29, 28, 39, 44, 27, 46, 34, 31, 37, 30, 38,
    35, 100, 32, 24, 25, 42, 40, 101, 102, 47, 103, 253, 253, 253, 253, 253,
    253, 7, 18, 33, 11, 1, 17, 12, 22, 5, 19, 9, 8, 13, 4, 10,
    15, 104, 2, 6, 3, 14, 16, 105, 106, 20, 107, 253, 253, 253, 253, 251,
    253, 255, 253, 108, 253, 253, 253, 253, 109, 253, 110, 253, 111, 255, 112, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 113, 253, 114, 255, 115, 116,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 117, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 118, 253, 253, 253, 252, 119, 253, 252, 252, 252, 253,
    120, 121, 122, 123, 124, 49, 50, 125, 126, 127, 128, 129, 130, 131, 132, 133,
    134, 135, 136, 137, 138, 139, 140, 253, 48, 141, 142, 143, 144, 145, 146, 147,
    148, 149, 150, 151, 152, 21, 45, 153, 154, 155, 156, 157, 158, 159, 160, 161,
    162, 163, 164, 165, 166, 167, 168, 253, 23, 169, 170, 171, 172, 173, 174, 175,
];

pub(crate) static WINDOWS_1252_NORWEGIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Norwegian",
    char_to_order_map: &WINDOWS_1252_NORWEGIAN_CHAR_TO_ORDER,
    language_model: &NORWEGIAN_LANG_MODEL,
    typical_positive_ratio: 0.971523,
    keep_ascii_letters: false,
    reversed: false,
};
