// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static UKRAINIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0,
    0, 3, 2, 3, 0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 2, 3, 3, 2, 3, 3, 2, 2, 3, 3, 2, 3, 1, 3, 3, 1, 3, 2, 2, 3, 3, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0,
    0, 1, 1, 3, 0, 1, 0, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3, 1, 3, 3, 1, 1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0,
    0, 3, 3, 3, 0, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 2, 1, 3, 1, 2, 3, 0, 1, 2, 2, 2, 2, 1, 2, 2, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 2, 3, 2, 1, 3, 2, 2, 3, 3, 1, 2, 3, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 1, 2, 2, 1, 0, 3, 2, 3, 2, 3, 1, 0, 2, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 2, 2, 1, 1, 1, 2, 1, 1, 1, 0, 3, 2, 0, 1, 2, 1, 0, 1, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 2, 3, 3, 3, 1, 3, 2, 3, 3, 0, 2, 3, 0, 1, 0, 0, 3, 3, 1, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 2, 1, 2, 3, 2, 3, 2, 3, 2, 2, 3, 1, 2, 3, 0, 3, 1, 2, 1, 2, 2, 2, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 2, 2, 3, 3, 0, 2, 1, 3, 2, 2, 1, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 2, 3, 0, 2, 1, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 2, 3, 2, 3, 2, 1, 3, 1, 0, 2, 3, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 1, 3, 1, 2, 1, 0, 1, 1, 0, 0, 2, 0, 3, 2, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 0, 1, 0, 3, 3, 3, 3, 2, 2, 3, 2, 3, 2, 0, 3, 2, 1, 2, 3, 1, 1, 3, 3, 3, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 1, 3, 3, 1, 3, 2, 0, 1, 1, 1, 1, 3, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 0, 3, 3, 1, 1, 2, 2, 2, 1, 2, 2, 1, 1, 2, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 3, 0, 0, 0, 3, 1, 2, 3, 3, 1, 2, 0, 2, 2, 3, 1, 2, 0, 2, 2, 1, 0, 2, 1, 3, 1, 3, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 3, 0, 1, 1, 3, 2, 3, 3, 3, 3, 3, 1, 3, 2, 2, 1, 2, 0, 0, 2, 1, 0, 2, 1, 1, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 2, 3, 2, 3, 3, 1, 1, 0, 3, 1, 1, 2, 1, 1, 1, 2, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 1, 1, 3, 2, 2, 1, 3, 1, 1, 1, 0, 0, 0, 0, 0, 2, 2, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 1, 1, 2, 1, 3, 2, 3, 1, 1, 2, 0, 2, 1, 0, 1, 2, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 3, 3, 3, 2, 0, 0, 0, 1, 1, 0, 2, 0, 1, 3, 2, 1, 3, 0, 1, 0, 0, 1, 1, 0, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 2, 3, 2, 1, 2, 2, 1, 3, 2, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 0, 0, 0, 3, 2, 2, 3, 2, 2, 3, 1, 3, 1, 1, 0, 1, 0, 1, 2, 1, 1, 1, 1, 0, 1, 1, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 1, 3, 3, 2, 3, 1, 0, 1, 2, 1, 3, 2, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 2, 3, 0, 3, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 2, 0, 1, 0, 3, 2, 3, 2, 2, 2, 2, 0, 2, 2, 1, 1, 2, 0, 1, 2, 3, 2, 1, 1, 3, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 2, 0, 1, 0, 2, 2, 2, 2, 2, 2, 2, 0, 2, 1, 0, 2, 1, 0, 1, 1, 1, 1, 1, 2, 1, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 1, 3, 3, 1, 3, 0, 0, 1, 2, 0, 2, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 2, 0, 1, 0, 1, 0, 2, 0, 0, 3, 0, 1, 0, 2, 0, 2, 1, 0, 1, 0, 1, 1, 2, 1, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 2, 3, 3, 1, 0, 1, 1, 1, 0, 1, 2, 1, 0, 1, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 3, 0, 3, 0, 2, 1, 0, 0, 2, 2, 2, 0, 0, 0, 2, 2, 1, 0, 1, 2, 1, 2, 0, 1, 1, 0, 0, 0, 1, 1, 1,
    0, 3, 3, 0, 2, 3, 2, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 3, 0, 1, 0, 2, 3, 2, 2, 2, 3, 2, 2, 2, 2, 1, 2, 2, 0, 2, 2, 1, 0, 0, 1, 0, 1, 1, 1, 1, 2, 3, 0, 0, 1, 2, 2, 3, 3, 0, 3, 2, 3, 2, 2, 0, 1, 2, 2, 1, 0, 2, 0, 3, 1, 1, 1, 1, 0, 0, 0, 1,
    0, 3, 2, 2, 3, 3, 3, 1, 1, 2, 2, 3, 2, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 1, 2, 0, 3, 1, 1, 1, 0, 0, 2, 0, 1, 1, 1, 1, 2, 1, 1, 1, 0, 2, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 2, 3, 1, 2, 2, 0, 1, 2, 0, 3, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 3, 0, 0, 2, 1, 0, 3, 2, 1, 0, 2, 1, 2, 1, 2, 0, 1, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 3, 3, 2, 3, 1, 2, 2, 1, 2, 0, 2, 1, 3, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 1, 0, 1, 0, 2, 1, 0, 2, 1, 1, 1, 0, 0, 2, 3, 0, 0, 2, 0, 1, 2, 2, 0, 1, 2, 0, 1, 0, 2, 1, 1, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 2, 3, 2, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 3, 1, 1, 1, 1, 2, 3, 1, 1, 0, 0, 0, 2, 2, 2, 2, 0, 2, 1, 2, 0, 2, 1, 1, 0, 0, 0, 1, 0,
    0, 3, 3, 1, 1, 2, 3, 1, 0, 1, 1, 1, 1, 1, 2, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 3, 2, 1, 0, 0, 1, 2, 1, 1, 0, 1, 2, 2, 3, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 2, 0, 0, 0, 2, 2, 1, 2, 3, 1, 2, 1, 2, 2, 1, 1, 3, 0, 1, 2, 2, 0, 1, 1, 0, 1, 1, 0, 1, 2, 2, 0, 1, 2, 2, 2, 2, 3, 0, 1, 2, 2, 2, 2, 0, 0, 0, 2, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0,
    0, 3, 2, 0, 3, 3, 2, 0, 2, 1, 0, 1, 2, 0, 2, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 2, 1, 1, 0, 3, 0, 2, 1, 0, 0, 0, 1, 2, 2, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0,
    0, 3, 3, 1, 2, 2, 2, 0, 2, 2, 0, 0, 3, 0, 2, 0, 0, 0, 1, 0, 1, 0, 1, 0, 2, 0, 1, 0, 0, 0, 1, 0, 1, 2, 0, 2, 0, 2, 1, 2, 1, 2, 1, 1, 0, 1, 1, 2, 2, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0,
    0, 3, 2, 3, 1, 2, 2, 0, 2, 2, 0, 2, 1, 1, 2, 2, 0, 1, 0, 2, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 2, 1, 1, 1, 2, 1, 1, 2, 0, 1, 1, 2, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 2, 2, 2, 0, 0, 1, 1, 0, 0, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0, 0, 2, 2, 2, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 2, 2, 0,
    0, 3, 2, 0, 1, 3, 2, 0, 3, 0, 0, 0, 2, 0, 3, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 2, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 3, 0, 0, 0, 2, 2, 2, 1, 2, 2, 2, 0, 2, 0, 0, 1, 1, 0, 0, 2, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 2, 0, 1, 2, 2, 2, 2, 2, 0, 2, 2, 1, 2, 1, 0, 0, 0, 0, 0, 0, 1, 2, 2, 1, 1, 1, 0, 0, 0, 1, 1,
    0, 0, 0, 2, 0, 0, 1, 1, 2, 1, 2, 2, 2, 2, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 3, 0, 1, 1, 2, 2, 2, 2, 0, 2, 2, 1, 2, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 2, 0, 2, 0, 0, 1, 0,
    0, 2, 1, 2, 0, 2, 0, 1, 2, 2, 2, 2, 1, 2, 1, 2, 1, 0, 2, 1, 0, 1, 2, 1, 0, 0, 0, 0, 0, 1, 0, 1, 2, 1, 1, 0, 3, 1, 1, 1, 2, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 2, 0, 1, 2, 2, 0, 2, 2, 0, 0, 2, 0, 2, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 2, 0, 0, 0, 2, 1, 2, 1, 0, 0, 0, 1, 1, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 0, 2, 2, 0, 2, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1, 0, 0, 1, 1, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 2, 2, 3, 2, 2, 0, 1, 1, 2, 2, 1, 0, 0, 0, 2, 1, 0, 1, 0, 2, 0, 2, 2, 1, 0, 0, 0, 0,
    0, 2, 2, 0, 3, 2, 1, 1, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 0, 0, 0, 1, 2, 1, 3, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 3, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 2, 2, 1, 2, 1, 2, 2, 0, 2, 0, 2, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 1, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 2, 3, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0,
    0, 2, 2, 0, 1, 2, 2, 0, 1, 1, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1,
    0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
];

static CP1125_UKRAINIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    35, 46, 36, 50, 43, 48, 59, 44, 52, 55, 37, 45, 40, 33, 41, 32,
    39, 38, 42, 49, 51, 58, 57, 53, 56, 64, 152, 153, 61, 154, 62, 54,
    1, 19, 9, 22, 13, 5, 24, 18, 4, 21, 10, 12, 15, 3, 2, 16,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    8, 11, 7, 14, 28, 26, 25, 23, 29, 34, 155, 156, 20, 157, 30, 17,
    158, 159, 65, 60, 63, 27, 47, 6, 66, 31, 253, 253, 253, 253, 253, 253,
];

pub(crate) static CP1125_UKRAINIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP1125",
    language: "Ukrainian",
    char_to_order_map: &CP1125_UKRAINIAN_CHAR_TO_ORDER,
    language_model: &UKRAINIAN_LANG_MODEL,
    typical_positive_ratio: 0.975070,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_5_UKRAINIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 152, 153, 154, 63, 155, 47, 66, 156, 157, 158, 159, 160, 251, 161, 162,
    35, 46, 36, 50, 43, 48, 59, 44, 52, 55, 37, 45, 40, 33, 41, 32,
    39, 38, 42, 49, 51, 58, 57, 53, 56, 64, 163, 164, 61, 165, 62, 54,
    1, 19, 9, 22, 13, 5, 24, 18, 4, 21, 10, 12, 15, 3, 2, 16,
    8, 11, 7, 14, 28, 26, 25, 23, 29, 34, 166, 167, 20, 168, 30, 17,
    253, 169, 170, 171, 27, 172, 6, 31, 173, 174, 175, 176, 177, 253, 178, 179,
];

pub(crate) static ISO_8859_5_UKRAINIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-5",
    language: "Ukrainian",
    char_to_order_map: &ISO_8859_5_UKRAINIAN_CHAR_TO_ORDER,
    language_model: &UKRAINIAN_LANG_MODEL,
    typical_positive_ratio: 0.975291,
    keep_ascii_letters: false,
    reversed: false,
};

static KOI8_U_UKRAINIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 252, 253, 253,
    253, 253, 253, 152, 27, 253, 6, 31, 253, 253, 253, 253, 253, 60, 253, 253,
    253, 253, 253, 153, 63, 253, 47, 66, 253, 253, 253, 253, 253, 65, 253, 253,
    30, 1, 19, 25, 13, 5, 28, 22, 26, 4, 21, 10, 12, 15, 3, 2,
    16, 17, 8, 11, 7, 14, 24, 9, 20, 154, 18, 29, 155, 34, 23, 156,
    62, 35, 46, 57, 43, 48, 51, 50, 58, 52, 55, 37, 45, 40, 33, 41,
    32, 54, 39, 38, 42, 49, 59, 36, 61, 157, 44, 56, 158, 64, 53, 159,
];

pub(crate) static KOI8_U_UKRAINIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "KOI8-U",
    language: "Ukrainian",
    char_to_order_map: &KOI8_U_UKRAINIAN_CHAR_TO_ORDER,
    language_model: &UKRAINIAN_LANG_MODEL,
    typical_positive_ratio: 0.975070,
    keep_ascii_letters: false,
    reversed: false,
};

static MACCYRILLIC_UKRAINIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    35, 46, 36, 50, 43, 48, 59, 44, 52, 55, 37, 45, 40, 33, 41, 32,
    39, 38, 42, 49, 51, 58, 57, 53, 56, 64, 152, 153, 61, 154, 62, 54,
    253, 253, 65, 253, 253, 253, 253, 47, 253, 253, 253, 155, 156, 253, 157, 158,
    253, 253, 253, 253, 6, 159, 60, 160, 63, 27, 66, 31, 161, 162, 163, 164,
    165, 166, 253, 253, 167, 253, 253, 253, 253, 253, 253, 168, 169, 170, 171, 172,
    253, 253, 253, 253, 253, 253, 253, 253, 173, 174, 175, 176, 253, 177, 178, 17,
    1, 19, 9, 22, 13, 5, 24, 18, 4, 21, 10, 12, 15, 3, 2, 16,
    8, 11, 7, 14, 28, 26, 25, 23, 29, 34, 179, 180, 20, 181, 30, 253,
];

pub(crate) static MACCYRILLIC_UKRAINIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacCyrillic",
    language: "Ukrainian",
    char_to_order_map: &MACCYRILLIC_UKRAINIAN_CHAR_TO_ORDER,
    language_model: &UKRAINIAN_LANG_MODEL,
    typical_positive_ratio: 0.975070,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1251_UKRAINIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    152, 153, 253, 154, 253, 253, 253, 253, 253, 253, 155, 253, 156, 157, 158, 159,
    160, 253, 253, 253, 253, 253, 253, 253, 255, 253, 161, 253, 162, 163, 164, 165,
    253, 166, 167, 168, 253, 65, 253, 253, 169, 253, 63, 253, 253, 251, 253, 66,
    253, 253, 47, 6, 60, 170, 253, 253, 171, 253, 27, 253, 172, 173, 174, 31,
    35, 46, 36, 50, 43, 48, 59, 44, 52, 55, 37, 45, 40, 33, 41, 32,
    39, 38, 42, 49, 51, 58, 57, 53, 56, 64, 175, 176, 61, 177, 62, 54,
    1, 19, 9, 22, 13, 5, 24, 18, 4, 21, 10, 12, 15, 3, 2, 16,
    8, 11, 7, 14, 28, 26, 25, 23, 29, 34, 178, 179, 20, 180, 30, 17,
];

pub(crate) static WINDOWS_1251_UKRAINIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1251",
    language: "Ukrainian",
    char_to_order_map: &WINDOWS_1251_UKRAINIAN_CHAR_TO_ORDER,
    language_model: &UKRAINIAN_LANG_MODEL,
    typical_positive_ratio: 0.975070,
    keep_ascii_letters: false,
    reversed: false,
};
