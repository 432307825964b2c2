// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static TURKISH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 0, 3, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 2, 1, 3, 1, 2, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 0, 3, 0, 0, 0, 2, 0, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 2, 2, 3, 3, 2, 3, 0, 2, 1, 0, 2, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 0, 3, 3, 1, 3, 0, 1, 1, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 2, 2, 3, 3, 3, 2, 0, 2, 1, 1, 3, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 1, 0, 2, 1, 3, 3, 3, 3, 0, 2, 3, 3, 2, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 1, 0, 1, 3, 3, 3, 3, 0, 3, 3, 3, 3, 0, 0, 3, 2, 3, 2, 3, 1, 0, 3, 2, 3, 1, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 3, 1, 2, 3, 2, 3, 0, 2, 3, 2, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 2, 3, 2, 3, 1, 2, 3, 3, 2, 2, 0, 0, 1, 2, 3, 1, 2, 1, 1, 1, 3, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 2, 3, 3, 2, 3, 3, 2, 3, 3, 1, 3, 1, 1, 3, 3, 3, 3, 3, 0, 1, 3, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 2, 1, 1, 3, 1, 2, 3, 1, 2, 0, 2, 2, 2, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 0, 3, 3, 3, 3, 1, 0, 3, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 2, 2, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 2, 1, 0, 1, 3, 3, 2, 3, 0, 1, 1, 3, 2, 0, 1, 2, 2, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 3, 1, 1, 2, 2, 3, 3, 2, 2, 2, 1, 1, 1, 3, 2, 1, 0, 1, 1, 3, 2, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 1, 2, 3, 3, 2, 3, 3, 0, 3, 0, 1, 0, 2, 2, 1, 2, 0, 1, 0, 3, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 1, 3, 2, 1, 3, 0, 3, 2, 1, 3, 0, 2, 0, 1, 3, 1, 0, 0, 0, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 2, 2, 3, 1, 3, 3, 1, 2, 3, 3, 2, 0, 0, 2, 3, 3, 3, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 2, 1, 2, 1, 3, 3, 1, 1, 0, 0, 1, 2, 3, 2, 2, 1, 1, 2, 3, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 3, 3, 3, 0, 3, 2, 3, 3, 0, 0, 3, 1, 3, 3, 3, 0, 0, 2, 2, 3, 3, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 2, 3, 3, 2, 1, 3, 3, 3, 1, 1, 0, 1, 0, 1, 3, 1, 2, 0, 1, 3, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 2, 2, 3, 3, 3, 1, 0, 3, 0, 2, 1, 2, 2, 0, 1, 2, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 1, 3, 0, 2, 3, 0, 2, 3, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 1, 2, 0, 1, 2, 1, 0, 2, 3, 2, 1, 2, 0, 0, 1, 1, 3, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 2, 1, 2, 2, 3, 1, 2, 0, 3, 3, 1, 1, 1, 2, 0, 0, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 3, 3, 3, 0, 2, 1, 2, 2, 0, 0, 2, 1, 1, 1, 3, 3, 0, 0, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 1, 1, 3, 2, 2, 1, 0, 1, 0, 1, 1, 1, 2, 0, 0, 1, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 3, 3, 2, 2, 0, 2, 3, 2, 2, 0, 1, 3, 2, 2, 2, 2, 1, 0, 1, 2, 2, 2, 1, 0, 2, 1, 3, 3, 3, 1, 3, 2, 2, 3, 1, 2, 3, 3, 3, 0, 3, 2, 2, 2, 1, 1, 1, 2, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 1, 1, 0, 3, 3, 0, 0, 1, 3, 3, 1, 0, 0, 0, 0, 0, 3, 2, 1, 0, 2, 2, 2, 0, 3, 2, 1, 1, 3, 3, 1, 2, 2, 2, 2, 2, 1, 3, 2, 1, 2, 3, 2, 1, 1, 1, 1, 1, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 1, 0, 1, 1, 0, 0, 0, 0, 3, 2, 1, 1, 0, 0, 1, 0, 2, 0, 0, 1, 2, 1, 2, 0, 2, 2, 1, 1, 3, 1, 1, 1, 1, 3, 1, 2, 1, 1, 3, 2, 1, 2, 1, 1, 2, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 2, 0, 0, 1, 0, 0, 1, 1, 3, 3, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 1, 2, 0, 2, 2, 2, 1, 2, 1, 0, 1, 2, 2, 1, 2, 1, 1, 2, 0, 2, 2, 1, 2, 2, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 2, 2, 3, 3, 0, 2, 2, 2, 2, 0, 1, 2, 1, 2, 0, 0, 1, 0, 0, 1, 3, 2, 0, 0, 1, 3, 2, 2, 1, 1, 2, 3, 2, 2, 0, 1, 2, 3, 2, 2, 3, 2, 1, 1, 1, 2, 3, 2, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 3, 0, 1, 1, 1, 0, 1, 1, 3, 3, 2, 0, 0, 0, 0, 0, 3, 1, 0, 0, 1, 2, 0, 0, 3, 2, 1, 1, 3, 2, 2, 1, 2, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 2, 0, 0, 2, 1, 0, 1, 1, 3, 3, 1, 0, 1, 0, 0, 0, 2, 0, 1, 0, 1, 2, 2, 0, 3, 2, 1, 1, 2, 2, 1, 0, 1, 2, 2, 2, 1, 1, 2, 0, 1, 2, 0, 2, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 1, 2, 1, 1, 0, 2, 1, 0, 0, 2, 2, 0, 1, 0, 0, 1, 0, 3, 1, 1, 0, 0, 2, 2, 0, 2, 2, 1, 1, 2, 2, 0, 1, 1, 2, 2, 1, 2, 0, 1, 2, 1, 2, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 1, 1, 2, 2, 0, 0, 0, 1, 3, 2, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 3, 2, 1, 2, 3, 2, 0, 1, 1, 2, 2, 2, 1, 1, 1, 1, 1, 2, 1, 2, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 2, 3, 3, 0, 2, 1, 2, 2, 0, 0, 1, 1, 3, 2, 2, 1, 0, 1, 2, 1, 0, 1, 0, 1, 0, 2, 1, 0, 0, 2, 2, 0, 3, 1, 2, 2, 2, 2, 0, 2, 1, 0, 1, 0, 2, 2, 3, 1, 0, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 3, 0, 1, 0, 0, 0, 0, 1, 3, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 2, 2, 1, 1, 2, 2, 1, 2, 2, 1, 1, 2, 2, 1, 2, 2, 2, 2, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 1, 1, 0, 1, 0, 0, 1, 0, 1, 2, 2, 1, 0, 0, 0, 1, 1, 3, 1, 0, 0, 1, 0, 0, 1, 3, 2, 2, 1, 3, 1, 2, 1, 1, 2, 1, 2, 1, 1, 2, 1, 1, 2, 1, 2, 2, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 2, 0, 1, 1, 1, 1, 0, 1, 0, 0, 2, 2, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 2, 2, 2, 1, 2, 2, 1, 2, 2, 2, 2, 2, 1, 1, 2, 2, 2, 3, 0, 2, 2, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 2, 1, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 2, 0, 3, 1, 0, 1, 2, 2, 1, 1, 1, 1, 2, 1, 1, 1, 2, 2, 0, 2, 0, 2, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 2, 3, 2, 2, 0, 2, 2, 1, 2, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1, 2, 1, 1, 1, 0, 2, 1, 3, 2, 1, 0, 2, 1, 1, 3, 0, 2, 2, 2, 2, 1, 2, 2, 2, 1, 1, 2, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 1, 1, 0, 1, 0, 0, 1, 0, 0, 2, 2, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 1, 3, 2, 1, 2, 2, 2, 1, 2, 1, 1, 2, 1, 1, 2, 1, 3, 1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 1, 2, 0, 1, 0, 2, 1, 1, 0, 3, 3, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 1, 2, 2, 2, 1, 2, 2, 2, 1, 1, 1, 2, 2, 2, 0, 2, 1, 1, 2, 2, 1, 1, 1, 0, 1, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 2, 2, 1, 0, 1, 2, 1, 0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 1, 2, 2, 3, 2, 1, 2, 2, 2, 3, 1, 2, 2, 2, 1, 2, 2, 2, 2, 1, 1, 2, 1, 2, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 1, 1, 0, 2, 0, 1, 2, 0, 2, 2, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 2, 1, 1, 0, 3, 2, 0, 0, 1, 1, 1, 1, 0, 0, 2, 0, 1, 1, 2, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 2, 2, 2, 1, 0, 1, 1, 1, 1, 0, 0, 3, 1, 0, 1, 2, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 2, 0, 1, 2, 3, 1, 1, 2, 0, 2, 2, 3, 2, 1, 2, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 1, 2, 0, 1, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0, 1, 1, 0, 1, 2, 1, 2, 1, 1, 0, 2, 1, 1, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 1, 1, 3, 0, 0, 0, 1, 2, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 2, 0, 1, 2, 1, 3, 0, 1, 0, 0, 1, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 1, 1, 0, 1, 1, 0, 2, 1, 1, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 2, 3, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 2, 0, 2, 0, 0, 1, 2, 1, 0, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 2, 1, 1, 0, 2, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 2, 0, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 2, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP1026_TURKISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 59, 100, 101, 102, 103, 104, 253, 105, 50, 253, 253, 253, 253, 253,
    253, 106, 107, 108, 109, 110, 60, 111, 112, 113, 58, 38, 253, 253, 253, 253,
    253, 253, 114, 115, 116, 117, 118, 119, 253, 120, 17, 253, 253, 253, 253, 253,
    121, 122, 123, 124, 125, 126, 127, 128, 129, 8, 253, 54, 56, 253, 253, 55,
    130, 1, 16, 22, 10, 2, 28, 20, 26, 3, 253, 253, 253, 253, 253, 253,
    253, 53, 12, 4, 11, 6, 13, 23, 131, 5, 132, 133, 134, 253, 135, 253,
    136, 27, 7, 9, 14, 25, 137, 138, 15, 19, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    18, 29, 32, 45, 31, 33, 49, 36, 47, 46, 251, 139, 253, 140, 141, 142,
    24, 57, 35, 40, 37, 44, 43, 39, 143, 41, 252, 144, 253, 145, 146, 147,
    21, 253, 30, 34, 48, 52, 148, 149, 42, 51, 252, 150, 253, 151, 152, 153,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 154, 253, 155, 156, 251,
];

pub(crate) static CP1026_TURKISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP1026",
    language: "Turkish",
    char_to_order_map: &CP1026_TURKISH_CHAR_TO_ORDER,
    language_model: &TURKISH_LANG_MODEL,
    typical_positive_ratio: 0.964036,
    keep_ascii_letters: false,
    reversed: false,
};

static CP857_TURKISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 29, 32, 45, 31, 33, 49, 36, 47, 46, 57, 35, 40, 37, 44, 43,
    39, 100, 41, 30, 34, 48, 52, 101, 102, 42, 51, 253, 253, 253, 253, 253,
    253, 1, 16, 22, 10, 2, 28, 20, 26, 3, 53, 12, 4, 11, 6, 13,
    23, 103, 5, 7, 9, 14, 25, 104, 105, 15, 19, 253, 253, 253, 253, 251,
    50, 21, 106, 59, 107, 108, 109, 18, 110, 111, 112, 113, 60, 8, 114, 115,
    116, 117, 118, 119, 27, 120, 121, 122, 38, 54, 55, 123, 253, 124, 56, 17,
    125, 126, 127, 128, 129, 130, 58, 24, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 131, 132, 133, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 134, 135, 253, 253, 253, 253, 253, 253, 253, 253,
    136, 137, 138, 139, 140, 255, 141, 142, 143, 253, 253, 253, 253, 253, 144, 253,
    145, 146, 147, 148, 149, 150, 151, 255, 253, 152, 153, 154, 155, 156, 253, 253,
    251, 253, 255, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP857_TURKISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP857",
    language: "Turkish",
    char_to_order_map: &CP857_TURKISH_CHAR_TO_ORDER,
    language_model: &TURKISH_LANG_MODEL,
    typical_positive_ratio: 0.964036,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_3_TURKISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 29, 32, 45, 31, 33, 49, 36, 47, 46, 57, 35, 40, 37, 44, 43,
    39, 100, 41, 30, 34, 48, 52, 101, 102, 42, 51, 253, 253, 253, 253, 253,
    253, 1, 16, 22, 10, 2, 28, 20, 26, 3, 53, 12, 4, 11, 6, 13,
    23, 103, 5, 7, 9, 14, 25, 104, 105, 15, 19, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 106, 253, 253, 253, 255, 107, 253, 253, 38, 56, 58, 108, 251, 255, 109,
    253, 110, 252, 252, 253, 111, 112, 253, 253, 8, 17, 24, 113, 252, 255, 114,
    115, 116, 117, 255, 118, 119, 120, 50, 121, 122, 123, 124, 125, 126, 127, 128,
    255, 129, 130, 131, 132, 133, 54, 253, 134, 135, 136, 137, 55, 138, 139, 140,
    141, 142, 59, 255, 143, 144, 145, 18, 146, 147, 148, 149, 150, 151, 60, 152,
    255, 153, 154, 155, 156, 157, 27, 253, 158, 159, 160, 161, 21, 162, 163, 253,
];

pub(crate) static ISO_8859_3_TURKISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-3",
    language: "Turkish",
    char_to_order_map: &ISO_8859_3_TURKISH_CHAR_TO_ORDER,
    language_model: &TURKISH_LANG_MODEL,
    typical_positive_ratio: 0.964036,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_9_TURKISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 29, 32, 45, 31, 33, 49, 36, 47, 46, 57, 35, 40, 37, 44, 43,
    39, 100, 41, 30, 34, 48, 52, 101, 102, 42, 51, 253, 253, 253, 253, 253,
    253, 1, 16, 22, 10, 2, 28, 20, 26, 3, 53, 12, 4, 11, 6, 13,
    23, 103, 5, 7, 9, 14, 25, 104, 105, 15, 19, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 106, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 107, 253, 253, 253, 252, 108, 253, 252, 252, 252, 253,
    109, 110, 111, 112, 113, 114, 115, 50, 116, 117, 118, 119, 120, 121, 122, 123,
    58, 124, 125, 126, 127, 128, 54, 253, 129, 130, 131, 132, 55, 38, 56, 133,
    134, 135, 59, 136, 137, 138, 139, 18, 140, 141, 142, 143, 144, 145, 60, 146,
    24, 147, 148, 149, 150, 151, 27, 253, 152, 153, 154, 155, 21, 8, 17, 156,
];

pub(crate) static ISO_8859_9_TURKISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-9",
    language: "Turkish",
    char_to_order_map: &ISO_8859_9_TURKISH_CHAR_TO_ORDER,
    language_model: &TURKISH_LANG_MODEL,
    typical_positive_ratio: 0.964036,
    keep_ascii_letters: false,
    reversed: false,
};

static MACTURKISH_TURKISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 29, 32, 45, 31, 33, 49, 36, 47, 46, 57, 35, 40, 37, 44, 43,
    39, 100, 41, 30, 34, 48, 52, 101, 102, 42, 51, 253, 253, 253, 253, 253,
    253, 1, 16, 22, 10, 2, 28, 20, 26, 3, 53, 12, 4, 11, 6, 13,
    23, 103, 5, 7, 9, 14, 25, 104, 105, 15, 19, 253, 253, 253, 253, 251,
    106, 107, 50, 108, 109, 54, 55, 110, 111, 59, 112, 113, 114, 18, 115, 116,
    117, 118, 119, 120, 60, 121, 122, 123, 124, 125, 27, 126, 127, 128, 129, 21,
    253, 253, 253, 253, 253, 253, 253, 130, 253, 253, 253, 253, 253, 253, 131, 132,
    253, 253, 253, 253, 253, 133, 253, 253, 253, 134, 253, 135, 136, 137, 138, 139,
    253, 253, 253, 253, 140, 253, 253, 253, 253, 253, 253, 141, 142, 143, 144, 145,
    253, 253, 253, 253, 253, 253, 253, 253, 146, 147, 58, 24, 38, 8, 56, 17,
    253, 253, 253, 253, 253, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158,
    251, 159, 160, 161, 162, 251, 163, 253, 253, 253, 253, 253, 253, 253, 253, 164,
];

pub(crate) static MACTURKISH_TURKISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacTurkish",
    language: "Turkish",
    char_to_order_map: &MACTURKISH_TURKISH_CHAR_TO_ORDER,
    language_model: &TURKISH_LANG_MODEL,
    typical_positive_ratio: 0.964036,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1254_TURKISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 29, 32, 45, 31, 33, 49, 36, 47, 46, 57, 35, 40, 37, 44, 43,
    39, 100, 41, 30, 34, 48, 52, 101, 102, 42, 51, 253, 253, 253, 253, 253,
    253, 1, 16, 22, 10, 2, 28, 20, 26, 3, 53, 12, 4, 11, 6, 13,
    23, 103, 5, 7, 9, 14, 25, 104, 105, 15, 19, 253, 253, 253, 253, 251,
    253, 255, 253, 106, 253, 253, 253, 253, 107, 253, 108, 253, 109, 255, 255, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 110, 253, 111, 255, 255, 112,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 113, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 114, 253, 253, 253, 252, 115, 253, 252, 252, 252, 253,
    116, 117, 118, 119, 120, 121, 122, 50, 123, 124, 125, 126, 127, 128, 129, 130,
    58, 131, 132, 133, 134, 135, 54, 253, 136, 137, 138, 139, 55, 38, 56, 140,
    141, 142, 59, 143, 144, 145, 146, 18, 147, 148, 149, 150, 151, 152, 60, 153,
    24, 154, 155, 156, 157, 158, 27, 253, 159, 160, 161, 162, 21, 8, 17, 163,
];

pub(crate) static WINDOWS_1254_TURKISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1254",
    language: "Turkish",
    char_to_order_map: &WINDOWS_1254_TURKISH_CHAR_TO_ORDER,
    language_model: &TURKISH_LANG_MODEL,
    typical_positive_ratio: 0.964036,
    keep_ascii_letters: false,
    reversed: false,
};
