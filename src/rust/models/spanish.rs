// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static SPANISH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 2, 1, 0, 3, 2, 3, 1, 3, 1, 1, 1, 1, 1, 1, 3, 3, 1, 1, 2, 1, 1, 1, 0, 1, 0, 2, 0, 0, 1, 3, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 2, 0, 0, 3, 1, 3, 1, 3, 1, 1, 1, 1, 1, 1, 3, 3, 0, 0, 2, 1, 0, 1, 2, 0, 0, 3, 1, 1, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 2, 0, 0, 3, 1, 2, 1, 2, 1, 0, 1, 0, 1, 1, 2, 3, 1, 0, 1, 1, 1, 1, 0, 1, 1, 2, 0, 1, 1, 0, 3, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 1, 3, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 3, 1, 0, 1, 1, 1, 1, 2, 0, 1, 0, 0, 2, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 0, 3, 3, 1, 1, 1, 3, 1, 1, 1, 0, 1, 2, 2, 2, 1, 1, 3, 1, 1, 1, 1, 0, 1, 2, 0, 2, 0, 0, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 0, 3, 2, 1, 1, 0, 2, 1, 1, 1, 0, 1, 2, 3, 3, 1, 1, 2, 0, 1, 1, 3, 1, 1, 3, 1, 2, 1, 0, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 1, 0, 2, 3, 1, 3, 0, 1, 1, 0, 1, 0, 0, 1, 3, 3, 1, 1, 0, 0, 1, 0, 0, 2, 0, 2, 1, 2, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 2, 1, 2, 3, 2, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, 0, 1, 1, 1, 1, 1, 2, 1, 1, 3, 1, 1, 1, 1, 1, 1, 2, 0, 2, 1, 0, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 1, 2, 2, 2, 1, 3, 1, 2, 1, 1, 1, 1, 1, 1, 2, 0, 1, 0, 3, 1, 1, 0, 2, 1, 1, 1, 1, 2, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 1, 3, 2, 3, 3, 3, 3, 2, 2, 1, 2, 1, 1, 3, 3, 0, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 3, 1, 1, 1, 1, 1, 1, 3, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 3, 3, 3, 3, 1, 2, 3, 1, 3, 3, 1, 3, 1, 1, 2, 1, 3, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1, 3, 0, 0, 3, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 1, 0, 2, 1, 0, 2, 0, 3, 0, 0, 0, 0, 1, 1, 2, 3, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 3, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 2, 3, 3, 3, 3, 3, 1, 1, 1, 3, 1, 2, 2, 0, 3, 1, 2, 1, 1, 2, 1, 1, 1, 0, 0, 1, 0, 0, 2, 0, 2, 1, 1, 0, 3, 2, 0, 2, 0, 1, 0, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 2, 2, 2, 2, 3, 3, 3, 3, 2, 1, 2, 3, 1, 1, 3, 0, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 2, 1, 1, 1, 3, 0, 0, 1, 0, 3, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 2, 3, 2, 3, 3, 2, 3, 1, 2, 1, 1, 3, 1, 0, 2, 0, 0, 1, 1, 3, 0, 0, 1, 0, 0, 1, 2, 3, 1, 0, 2, 0, 1, 0, 3, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 2, 3, 1, 3, 3, 2, 1, 1, 3, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 2, 1, 0, 0, 1, 1, 2, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 2, 3, 1, 1, 2, 1, 2, 2, 1, 1, 1, 2, 1, 1, 1, 0, 0, 1, 0, 1, 1, 2, 1, 0, 0, 1, 0, 1, 0, 3, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 2, 1, 3, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 0, 1, 0, 0, 3, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 3, 3, 0, 3, 3, 1, 1, 0, 1, 2, 1, 1, 2, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 2, 1, 3, 2, 1, 1, 3, 3, 1, 2, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 3, 3, 1, 2, 3, 1, 2, 1, 1, 2, 0, 1, 1, 2, 0, 0, 2, 0, 1, 3, 3, 3, 0, 2, 3, 3, 3, 3, 2, 0, 2, 3, 2, 0, 2, 2, 2, 0, 2, 2, 0, 2, 0, 1, 0, 0, 3, 2, 2, 1, 1, 1, 0, 1, 1, 0, 0, 0, 2,
    0, 0, 0, 0, 3, 3, 3, 1, 1, 3, 3, 3, 2, 2, 3, 1, 2, 3, 1, 0, 1, 0, 0, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 1, 1, 1, 1, 1, 2, 0, 1, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 1, 1, 3, 0, 0, 2, 2, 3, 3, 1, 0, 0, 0, 2, 2, 1, 3, 1, 1, 3, 0, 3, 1, 3, 2, 2, 2, 3, 3, 0, 0, 3, 3, 2, 2, 1, 1, 1, 2, 2, 1, 2, 0, 2, 0, 1, 1, 2, 1, 1, 2, 3, 0, 1, 1, 0, 2, 0, 0,
    0, 2, 3, 1, 1, 1, 1, 3, 1, 1, 3, 3, 2, 3, 2, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 2, 1, 2, 1, 0, 1, 0, 0, 1, 2, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 2, 3, 2, 1, 2, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 0, 1, 1, 0, 1, 3, 0, 1, 2, 2, 2, 3, 3, 3, 2, 1, 2, 3, 1, 0, 3, 3, 1, 1, 3, 2, 1, 2, 0, 0, 2, 1, 2, 2, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 2,
    0, 3, 3, 3, 2, 2, 2, 2, 1, 2, 1, 3, 3, 3, 2, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 2, 2, 3, 0, 3, 1, 2, 2, 0, 1, 2, 1, 1, 2, 1, 0, 0, 2, 0, 1, 3, 0, 2, 0, 2, 3, 3, 2, 3, 3, 1, 1, 3, 3, 0, 3, 3, 2, 0, 2, 2, 0, 2, 0, 1, 0, 0, 2, 2, 1, 1, 0, 1, 3, 1, 2, 0, 0, 0, 0,
    0, 3, 2, 3, 1, 1, 1, 2, 1, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 3, 1, 0, 3, 0, 3, 1, 2, 1, 1, 1, 3, 1, 0, 0, 3, 3, 1, 2, 2, 2, 2, 1, 3, 0, 2, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 1, 2, 0,
    0, 3, 2, 2, 1, 0, 1, 1, 1, 0, 0, 0, 2, 1, 1, 0, 0, 0, 1, 1, 0, 3, 1, 0, 2, 1, 3, 0, 3, 2, 2, 3, 2, 2, 0, 0, 3, 3, 0, 2, 2, 2, 0, 1, 2, 0, 3, 0, 1, 0, 0, 1, 2, 1, 1, 2, 1, 2, 1, 0, 1, 1, 0, 0,
    0, 2, 3, 3, 2, 1, 0, 3, 2, 2, 1, 0, 2, 0, 0, 0, 1, 1, 1, 1, 0, 3, 0, 0, 3, 2, 3, 1, 3, 1, 1, 3, 2, 2, 1, 0, 3, 3, 2, 2, 1, 2, 0, 1, 2, 0, 1, 0, 1, 0, 0, 1, 1, 1, 1, 2, 1, 0, 0, 2, 1, 1, 0, 0,
    0, 2, 3, 3, 1, 3, 1, 2, 1, 2, 1, 2, 2, 0, 0, 0, 1, 0, 0, 2, 2, 2, 1, 0, 2, 0, 3, 1, 3, 1, 3, 2, 2, 2, 0, 0, 3, 3, 0, 2, 1, 2, 1, 1, 2, 0, 1, 0, 3, 0, 0, 1, 1, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 0, 2, 0, 2, 1, 0, 2, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2, 1, 2, 0, 3, 1, 3, 2, 3, 2, 3, 2, 0, 0, 2, 3, 1, 2, 2, 1, 1, 1, 2, 1, 2, 1, 1, 0, 0, 1, 0, 1, 2, 2, 1, 1, 1, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 1, 1, 0, 2, 1, 1, 3, 0, 3, 0, 1, 1, 0, 1, 0, 2, 0, 0, 2, 2, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 1, 0, 2, 1, 0, 1, 0, 3, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 0, 3, 0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 1, 0, 2, 3, 1, 0, 2, 0, 3, 2, 3, 2, 3, 2, 2, 2, 0, 0, 2, 3, 1, 1, 2, 2, 1, 1, 2, 0, 1, 0, 2, 0, 1, 1, 0, 0, 2, 2, 0, 0, 0, 1, 1, 1, 0, 0,
    0, 0, 0, 0, 2, 2, 1, 0, 0, 1, 2, 2, 1, 3, 2, 2, 2, 1, 1, 0, 1, 1, 0, 0, 3, 0, 2, 0, 2, 3, 3, 3, 3, 3, 0, 0, 3, 1, 0, 2, 3, 3, 0, 2, 2, 1, 2, 0, 1, 0, 0, 1, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 3, 3, 1, 3, 0, 2, 1, 2, 3, 0, 1, 3, 1, 2, 2, 1, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 1, 0, 3, 1, 1, 0, 0, 2, 1, 1, 1, 1, 0, 2, 2, 1, 3, 0, 0, 2, 0, 3, 1, 3, 2, 2, 2, 1, 2, 0, 1, 2, 3, 1, 2, 1, 2, 0, 2, 1, 0, 1, 0, 1, 0, 0, 2, 2, 2, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0,
    0, 2, 3, 3, 2, 0, 1, 2, 1, 0, 1, 0, 3, 0, 0, 1, 0, 0, 1, 1, 0, 3, 2, 0, 2, 0, 3, 1, 3, 2, 1, 2, 1, 2, 0, 0, 2, 2, 1, 2, 2, 1, 1, 3, 2, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0,
    0, 2, 3, 3, 0, 2, 1, 3, 1, 2, 1, 1, 2, 1, 0, 0, 1, 1, 1, 0, 0, 2, 0, 0, 2, 0, 2, 0, 3, 1, 2, 2, 1, 2, 0, 0, 2, 2, 1, 2, 1, 2, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 3, 1, 3, 0, 1, 3, 2, 2, 0, 1, 3, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 1, 2, 0, 2, 1, 2, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 2, 0, 2, 1, 3, 1, 3, 3, 2, 1, 1, 0, 2, 2, 1, 1, 2, 2, 1, 1, 2, 0, 1, 1, 1, 0, 0, 1, 0, 0, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 3, 1, 3, 1, 1, 1, 1, 2, 1, 1, 1, 2, 0, 1, 0, 0, 0, 3, 0, 1, 3, 1, 2, 0, 2, 2, 3, 2, 1, 2, 1, 0, 3, 1, 0, 1, 2, 2, 0, 2, 2, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0,
    0, 3, 2, 2, 2, 1, 1, 2, 1, 1, 1, 2, 2, 2, 1, 1, 1, 2, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 2, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 1, 2, 1, 2, 1, 1, 0, 2, 2, 1, 0, 0, 0, 0, 0, 1, 1, 2, 0, 0, 2, 0, 2, 0, 3, 2, 2, 2, 2, 2, 1, 0, 2, 2, 0, 2, 1, 1, 0, 2, 2, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0,
    0, 0, 1, 0, 3, 3, 3, 1, 1, 2, 1, 3, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 0, 1, 0, 2, 0, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 3, 1, 0, 1, 0, 2, 1, 2, 1, 1, 1, 1, 1, 0, 0, 2, 2, 0, 1, 1, 1, 2, 0, 1, 0, 0, 1, 2, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0,
    0, 1, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 2, 2, 2, 3, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 2, 0, 1, 1, 1, 2, 0, 0, 2, 1, 0, 1, 2, 1, 0, 1, 1, 0, 1, 0, 1, 0, 0, 2, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 1, 1, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 1, 1, 2, 0, 2, 1, 2, 1, 1, 1, 0, 0, 1, 2, 1, 1, 1, 2, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 2, 2, 2, 0, 1, 1, 2, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 1, 2, 0, 0, 1, 0, 3, 0, 2, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 2, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 0, 1, 0, 2, 0, 1, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 1, 2, 0, 0, 2, 0, 1, 0, 1, 1, 1, 1, 2, 2, 0, 0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 1, 1, 0, 1, 1, 2, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0,
    0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 2, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 3, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 2, 0, 0, 0, 2, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP037_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 22, 103, 104, 105, 49, 253, 253, 253, 253, 253, 253,
    253, 47, 106, 107, 108, 38, 109, 110, 111, 112, 253, 253, 253, 253, 253, 253,
    253, 253, 113, 114, 115, 60, 116, 117, 118, 63, 253, 253, 253, 253, 253, 253,
    119, 64, 120, 121, 122, 61, 123, 124, 125, 253, 253, 253, 253, 253, 253, 253,
    126, 2, 15, 10, 8, 1, 16, 17, 20, 7, 253, 253, 127, 128, 129, 253,
    253, 35, 45, 9, 14, 6, 3, 13, 23, 5, 130, 131, 132, 253, 133, 253,
    134, 253, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 135, 136, 137, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 251, 138, 139, 140, 19, 141,
    253, 58, 54, 31, 40, 29, 37, 33, 56, 30, 252, 142, 65, 143, 42, 144,
    253, 253, 24, 36, 44, 52, 53, 51, 55, 59, 252, 145, 146, 147, 57, 148,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 149, 150, 151, 62, 251,
];

pub(crate) static CP037_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Spanish",
    char_to_order_map: &CP037_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 22, 103, 104, 105, 49, 253, 253, 253, 253, 253, 253,
    253, 47, 106, 107, 108, 38, 109, 110, 111, 112, 253, 253, 253, 253, 253, 253,
    253, 253, 113, 114, 115, 60, 116, 117, 118, 63, 253, 253, 253, 253, 253, 253,
    119, 64, 120, 121, 122, 61, 123, 124, 125, 253, 253, 253, 253, 253, 253, 253,
    126, 2, 15, 10, 8, 1, 16, 17, 20, 7, 253, 253, 127, 128, 129, 253,
    253, 35, 45, 9, 14, 6, 3, 13, 23, 5, 130, 131, 132, 253, 133, 253,
    134, 253, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 135, 136, 137, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 251, 138, 139, 140, 19, 141,
    253, 58, 54, 31, 40, 29, 37, 33, 56, 30, 252, 142, 65, 143, 42, 144,
    253, 253, 24, 36, 44, 52, 53, 51, 55, 59, 252, 145, 146, 147, 57, 148,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 149, 150, 151, 62, 251,
];

pub(crate) static CP500_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Spanish",
    char_to_order_map: &CP500_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 58, 54, 31, 40, 29, 37,
    33, 56, 30, 24, 36, 44, 52, 53, 51, 55, 59, 253, 253, 253, 253, 253,
    253, 2, 15, 10, 8, 1, 16, 17, 20, 7, 35, 45, 9, 14, 6, 3,
    13, 23, 5, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 253, 253, 251,
    100, 65, 47, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113,
    64, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 253, 125, 253, 126,
    22, 38, 19, 42, 49, 63, 127, 128, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 60, 129, 130, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 131, 132, 253, 253, 253, 253, 253, 253, 253, 253,
    133, 134, 135, 136, 137, 138, 61, 139, 140, 253, 253, 253, 253, 253, 141, 253,
    57, 142, 143, 144, 145, 146, 147, 148, 149, 62, 150, 151, 152, 153, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Spanish",
    char_to_order_map: &CP850_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 58, 54, 31, 40, 29, 37,
    33, 56, 30, 24, 36, 44, 52, 53, 51, 55, 59, 253, 253, 253, 253, 253,
    253, 2, 15, 10, 8, 1, 16, 17, 20, 7, 35, 45, 9, 14, 6, 3,
    13, 23, 5, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 253, 253, 251,
    100, 65, 47, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113,
    64, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 253, 125, 253, 126,
    22, 38, 19, 42, 49, 63, 127, 128, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 60, 129, 130, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 131, 132, 253, 253, 253, 253, 253, 253, 253, 253,
    133, 134, 135, 136, 137, 253, 61, 138, 139, 253, 253, 253, 253, 253, 140, 253,
    57, 141, 142, 143, 144, 145, 146, 147, 148, 62, 149, 150, 151, 152, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Spanish",
    char_to_order_map: &CP858_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 58, 54, 31, 40, 29, 37,
    33, 56, 30, 24, 36, 44, 52, 53, 51, 55, 59, 253, 253, 253, 253, 253,
    253, 2, 15, 10, 8, 1, 16, 17, 20, 7, 35, 45, 9, 14, 6, 3,
    13, 23, 5, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 100, 253, 101, 253, 102, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 103, 104, 253, 253, 105, 252, 106, 253, 107, 108, 109, 253,
    110, 60, 111, 112, 113, 114, 115, 116, 117, 64, 118, 119, 120, 61, 121, 122,
    123, 63, 124, 57, 125, 126, 127, 253, 128, 129, 62, 130, 131, 132, 133, 134,
    135, 22, 136, 137, 138, 139, 140, 141, 142, 47, 143, 144, 145, 38, 146, 147,
    148, 49, 149, 19, 150, 151, 152, 253, 153, 154, 42, 155, 65, 156, 157, 158,
];

pub(crate) static ISO_8859_15_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Spanish",
    char_to_order_map: &ISO_8859_15_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 58, 54, 31, 40, 29, 37,
    33, 56, 30, 24, 36, 44, 52, 53, 51, 55, 59, 253, 253, 253, 253, 253,
    253, 2, 15, 10, 8, 1, 16, 17, 20, 7, 35, 45, 9, 14, 6, 3,
    13, 23, 5, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    103, 60, 104, 105, 106, 107, 108, 109, 110, 64, 111, 112, 113, 61, 114, 115,
    116, 63, 117, 57, 118, 119, 120, 253, 121, 122, 62, 123, 124, 125, 126, 127,
    128, 22, 129, 130, 131, 132, 133, 134, 135, 47, 136, 137, 138, 38, 139, 140,
    141, 49, 142, 19, 143, 144, 145, 253, 146, 147, 42, 148, 65, 149, 150, 151,
];

pub(crate) static ISO_8859_1_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Spanish",
    char_to_order_map: &ISO_8859_1_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 58, 54, 31, 40, 29, 37,
    33, 56, 30, 24, 36, 44, 52, 53, 51, 55, 59, 253, 253, 253, 253, 253,
    253, 2, 15, 10, 8, 1, 16, 17, 20, 7, 35, 45, 9, 14, 6, 3,
    13, 23, 5, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 253, 253, 251,
    100, 101, 102, 64, 63, 103, 104, 22, 105, 106, 107, 108, 109, 110, 47, 111,
    112, 113, 38, 114, 115, 116, 49, 19, 117, 118, 119, 120, 42, 121, 122, 65,
    253, 253, 253, 253, 253, 253, 253, 123, 253, 253, 253, 253, 253, 253, 124, 125,
    253, 253, 253, 253, 253, 126, 253, 253, 253, 127, 253, 128, 129, 130, 131, 132,
    253, 253, 253, 253, 133, 253, 253, 253, 253, 253, 253, 134, 135, 136, 137, 138,
    253, 253, 253, 253, 253, 253, 253, 253, 139, 140, 253, 253, 253, 253, 141, 142,
    253, 253, 253, 253, 253, 143, 144, 60, 145, 146, 61, 147, 148, 149, 57, 150,
    251, 151, 62, 152, 153, 154, 155, 253, 253, 253, 253, 253, 253, 253, 253, 156,
];

pub(crate) static MACROMAN_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Spanish",
    char_to_order_map: &MACROMAN_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_SPANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 26, 43, 32, 39, 21, 41, 46, 48, 28, 58, 54, 31, 40, 29, 37,
    33, 56, 30, 24, 36, 44, 52, 53, 51, 55, 59, 253, 253, 253, 253, 253,
    253, 2, 15, 10, 8, 1, 16, 17, 20, 7, 35, 45, 9, 14, 6, 3,
    13, 23, 5, 4, 11, 12, 18, 50, 25, 27, 34, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 102, 253, 103, 255, 104, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 106, 255, 107, 108,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 109, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 110, 253, 253, 253, 252, 111, 253, 252, 252, 252, 253,
    112, 60, 113, 114, 115, 116, 117, 118, 119, 64, 120, 121, 122, 61, 123, 124,
    125, 63, 126, 57, 127, 128, 129, 253, 130, 131, 62, 132, 133, 134, 135, 136,
    137, 22, 138, 139, 140, 141, 142, 143, 144, 47, 145, 146, 147, 38, 148, 149,
    150, 49, 151, 19, 152, 153, 154, 253, 155, 156, 42, 157, 65, 158, 159, 160,
];

pub(crate) static WINDOWS_1252_SPANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Spanish",
    char_to_order_map: &WINDOWS_1252_SPANISH_CHAR_TO_ORDER,
    language_model: &SPANISH_LANG_MODEL,
    typical_positive_ratio: 0.973487,
    keep_ascii_letters: true,
    reversed: false,
};
