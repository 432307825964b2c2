// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static DUTCH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 3, 1, 1, 1, 0, 1, 0, 1, 1, 2, 1, 1, 2, 1, 1, 0, 1, 3, 1, 1, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 1, 0, 1, 2, 0, 1, 2, 1, 2, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 0, 0, 1, 0, 0, 0, 1, 0, 3, 1, 1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 2, 0, 3, 1, 0, 2, 0, 1, 1, 1, 0, 3, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 2, 3, 3, 0, 3, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 1, 2, 0, 0, 0, 3, 0, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 3, 1, 0, 0, 1, 1, 1, 1, 0, 3, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 0, 0, 2, 2, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 2, 0, 0, 1, 0, 1, 0, 0, 1, 2, 0, 1, 0, 0, 0, 1, 0, 2, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 2, 2, 2, 3, 2, 2, 0, 2, 1, 0, 1, 0, 0, 0, 1, 1, 2, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 2, 2, 3, 2, 1, 2, 1, 0, 1, 0, 0, 1, 1, 1, 3, 0, 0, 1, 0, 1, 0, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 2, 2, 2, 3, 1, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 1, 3, 3, 2, 3, 1, 3, 1, 0, 3, 1, 0, 1, 1, 2, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 2, 3, 3, 2, 3, 3, 1, 2, 2, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 1, 2, 1, 1, 1, 1, 1, 0, 0, 0, 2, 0, 1, 0, 1, 1, 2, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 2, 1, 2, 0, 2, 0, 0, 2, 0, 0, 0, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 3, 3, 3, 1, 3, 2, 1, 3, 2, 1, 2, 3, 2, 1, 1, 1, 3, 0, 2, 1, 0, 0, 0, 0, 1, 0, 1, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 3, 2, 3, 2, 3, 1, 1, 3, 2, 3, 2, 2, 3, 3, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 2, 3, 2, 2, 1, 1, 3, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 1, 3, 2, 3, 3, 2, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 1, 3, 2, 2, 2, 3, 2, 2, 2, 3, 2, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 1, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 1, 1, 2, 3, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 3, 2, 2, 3, 2, 1, 2, 3, 2, 2, 3, 2, 2, 2, 2, 2, 1, 1, 3, 1, 3, 2, 3, 1, 2, 1, 2, 3, 3, 3, 2, 2, 2, 3, 2, 3, 3, 2, 0, 0, 2, 2, 2, 1, 2, 2, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 1, 3, 2, 1, 3, 1, 1, 1, 1, 2, 2, 1, 1, 2, 1, 1, 2, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 3, 3, 3, 0, 1, 0, 1, 2, 0, 0, 0, 0, 1, 2, 1, 0, 1, 3, 0, 2, 3, 2, 2, 2, 2, 2, 2, 3, 2, 3, 2, 1, 2, 2, 2, 0, 2, 1, 2, 2, 2, 2, 2, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 2, 2, 3, 2, 0, 1, 2, 2, 2, 2, 2, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 3, 3, 3, 2, 2, 3, 2, 3, 0, 2, 2, 2, 2, 3, 2, 3, 2, 2, 2, 2, 2, 1, 1, 3, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 2, 0, 3, 0, 3, 0, 2, 3, 2, 2, 3, 0, 3, 2, 1, 0, 1, 1, 0, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 3, 1, 0, 2, 2, 1, 2, 1, 1, 1, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 2, 0, 2, 2, 3, 2, 2, 2, 2, 3, 2, 0, 3, 3, 2, 0, 0, 3, 0, 1, 1, 2, 3, 2, 3, 2, 3, 3, 3, 0, 2, 1, 2, 1, 2, 2, 2, 0, 1, 2, 2, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 0, 3, 2, 1, 3, 0, 1, 0, 2, 3, 1, 0, 1, 0, 0, 2, 0, 0, 1, 2, 1, 2, 3, 2, 2, 1, 2, 2, 2, 1, 1, 2, 1, 2, 1, 2, 1, 0, 1, 2, 2, 2, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 0, 3, 0, 0, 3, 2, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 1, 3, 2, 2, 2, 3, 2, 1, 2, 2, 3, 2, 2, 1, 2, 2, 1, 0, 2, 2, 1, 3, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 3, 0, 3, 3, 1, 3, 0, 2, 0, 2, 2, 0, 1, 0, 0, 0, 2, 1, 0, 1, 3, 0, 3, 3, 2, 3, 2, 2, 2, 3, 2, 2, 2, 2, 1, 2, 2, 2, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 0, 2, 1, 1, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 1, 1, 0, 1, 3, 0, 3, 3, 2, 3, 2, 2, 2, 2, 0, 3, 3, 2, 2, 2, 2, 2, 1, 1, 2, 2, 2, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 2, 2, 3, 2, 2, 2, 1, 1, 2, 3, 1, 3, 1, 2, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 2, 2, 3, 1, 2, 2, 2, 0, 0, 2, 0, 0, 0, 1, 1, 2, 1, 0, 0, 2, 1, 2, 3, 2, 2, 1, 3, 2, 2, 1, 1, 3, 1, 2, 1, 1, 1, 0, 1, 1, 1, 2, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 2, 0, 2, 2, 1, 2, 2, 0, 2, 0, 2, 1, 0, 1, 2, 0, 0, 1, 1, 2, 1, 2, 3, 2, 2, 3, 3, 2, 2, 0, 2, 2, 3, 2, 2, 2, 2, 0, 0, 2, 2, 0, 0, 2, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 1, 3, 1, 2, 3, 0, 0, 0, 0, 2, 0, 1, 0, 1, 1, 0, 0, 0, 0, 3, 0, 2, 3, 2, 2, 2, 1, 2, 1, 1, 0, 3, 3, 2, 2, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 3, 0, 3, 0, 2, 0, 0, 3, 0, 0, 0, 0, 0, 1, 1, 0, 1, 2, 1, 1, 3, 2, 2, 1, 1, 1, 2, 1, 1, 2, 2, 0, 2, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 1, 1, 3, 1, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 2, 2, 2, 2, 2, 1, 2, 1, 2, 1, 2, 1, 1, 2, 2, 0, 0, 2, 0, 2, 2, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 2, 2, 2, 0, 3, 1, 2, 0, 0, 2, 0, 0, 0, 0, 0, 3, 0, 1, 0, 2, 0, 2, 2, 2, 3, 2, 2, 2, 2, 2, 0, 2, 1, 1, 2, 2, 2, 0, 3, 0, 1, 0, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 1, 2, 2, 0, 3, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0, 2, 1, 0, 1, 2, 0, 1, 3, 3, 2, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 2, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 3, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 3, 2, 2, 1, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 2, 1, 0, 3, 1, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 3, 2, 1, 2, 1, 0, 1, 1, 2, 1, 2, 1, 0, 0, 1, 0, 0, 2, 0, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 0, 2, 1, 0, 3, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 2, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 0, 2, 3, 0, 3, 0, 2, 1, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0, 2, 1, 1, 1, 2, 1, 0, 0, 0, 2, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 1, 2, 2, 1, 0, 1, 1, 1, 1, 0, 1, 0, 2, 2, 0, 0, 2, 0, 1, 0, 0, 3, 2, 2, 1, 2, 2, 2, 3, 0, 1, 3, 3, 2, 2, 1, 1, 1, 1, 0, 2, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 2, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 2, 1, 2, 2, 1, 1, 1, 0, 1, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 0, 2, 1, 0, 2, 2, 1, 0, 0, 3, 0, 0, 0, 0, 0, 1, 2, 0, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 2, 1, 1, 1, 1, 0, 3, 1, 0, 0, 1, 2, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 0, 2, 0, 2, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 2, 0, 0, 1, 2, 0, 2, 1, 2, 1, 1, 0, 1, 0, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 2, 1, 1, 1, 1, 0, 1, 0, 0, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 2, 0, 1, 0, 1, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 2, 0, 0, 1, 2, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 2, 1, 1, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
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

static CP037_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 103, 104, 105, 106, 107, 253, 253, 253, 253, 253, 253,
    253, 108, 109, 110, 111, 112, 113, 114, 115, 116, 253, 253, 253, 253, 253, 253,
    253, 253, 117, 118, 119, 120, 121, 122, 123, 124, 253, 253, 253, 253, 253, 253,
    125, 126, 127, 128, 129, 130, 131, 132, 133, 253, 253, 253, 253, 253, 253, 253,
    134, 3, 17, 18, 9, 1, 21, 11, 19, 5, 253, 253, 135, 136, 137, 253,
    253, 22, 15, 10, 14, 2, 8, 16, 50, 6, 138, 139, 140, 253, 141, 253,
    142, 253, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 143, 144, 145, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 251, 146, 147, 148, 149, 150,
    253, 49, 40, 38, 36, 30, 28, 31, 52, 32, 252, 151, 152, 153, 154, 155,
    253, 253, 27, 25, 45, 43, 46, 48, 51, 47, 252, 156, 157, 158, 159, 160,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 161, 162, 163, 164, 251,
];

pub(crate) static CP037_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Dutch",
    char_to_order_map: &CP037_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 103, 104, 105, 106, 107, 253, 253, 253, 253, 253, 253,
    253, 108, 109, 110, 111, 112, 113, 114, 115, 116, 253, 253, 253, 253, 253, 253,
    253, 253, 117, 118, 119, 120, 121, 122, 123, 124, 253, 253, 253, 253, 253, 253,
    125, 126, 127, 128, 129, 130, 131, 132, 133, 253, 253, 253, 253, 253, 253, 253,
    134, 3, 17, 18, 9, 1, 21, 11, 19, 5, 253, 253, 135, 136, 137, 253,
    253, 22, 15, 10, 14, 2, 8, 16, 50, 6, 138, 139, 140, 253, 141, 253,
    142, 253, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 143, 144, 145, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 251, 146, 147, 148, 149, 150,
    253, 49, 40, 38, 36, 30, 28, 31, 52, 32, 252, 151, 152, 153, 154, 155,
    253, 253, 27, 25, 45, 43, 46, 48, 51, 47, 252, 156, 157, 158, 159, 160,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 161, 162, 163, 164, 251,
];

pub(crate) static CP500_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Dutch",
    char_to_order_map: &CP500_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 49, 40, 38, 36, 30, 28,
    31, 52, 32, 27, 25, 45, 43, 46, 48, 51, 47, 253, 253, 253, 253, 253,
    253, 3, 17, 18, 9, 1, 21, 11, 19, 5, 22, 15, 10, 14, 2, 8,
    16, 50, 6, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
    116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 253, 128, 253, 129,
    130, 131, 132, 133, 134, 135, 136, 137, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 138, 139, 140, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 141, 142, 253, 253, 253, 253, 253, 253, 253, 253,
    143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 253, 152, 253,
    153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 166, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Dutch",
    char_to_order_map: &CP850_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 49, 40, 38, 36, 30, 28,
    31, 52, 32, 27, 25, 45, 43, 46, 48, 51, 47, 253, 253, 253, 253, 253,
    253, 3, 17, 18, 9, 1, 21, 11, 19, 5, 22, 15, 10, 14, 2, 8,
    16, 50, 6, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
    116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 253, 128, 253, 129,
    130, 131, 132, 133, 134, 135, 136, 137, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 138, 139, 140, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 141, 142, 253, 253, 253, 253, 253, 253, 253, 253,
    143, 144, 145, 146, 147, 253, 148, 149, 150, 253, 253, 253, 253, 253, 151, 253,
    152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Dutch",
    char_to_order_map: &CP858_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 49, 40, 38, 36, 30, 28,
    31, 52, 32, 27, 25, 45, 43, 46, 48, 51, 47, 253, 253, 253, 253, 253,
    253, 3, 17, 18, 9, 1, 21, 11, 19, 5, 22, 15, 10, 14, 2, 8,
    16, 50, 6, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 100, 253, 101, 253, 102, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 103, 104, 253, 253, 105, 252, 106, 253, 107, 108, 109, 253,
    110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125,
    126, 127, 128, 129, 130, 131, 132, 253, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156,
    157, 158, 159, 160, 161, 162, 163, 253, 164, 165, 166, 167, 168, 169, 170, 171,
];

pub(crate) static ISO_8859_15_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Dutch",
    char_to_order_map: &ISO_8859_15_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 49, 40, 38, 36, 30, 28,
    31, 52, 32, 27, 25, 45, 43, 46, 48, 51, 47, 253, 253, 253, 253, 253,
    253, 3, 17, 18, 9, 1, 21, 11, 19, 5, 22, 15, 10, 14, 2, 8,
    16, 50, 6, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118,
    119, 120, 121, 122, 123, 124, 125, 253, 126, 127, 128, 129, 130, 131, 132, 133,
    134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148, 149,
    150, 151, 152, 153, 154, 155, 156, 253, 157, 158, 159, 160, 161, 162, 163, 164,
];

pub(crate) static ISO_8859_1_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Dutch",
    char_to_order_map: &ISO_8859_1_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 49, 40, 38, 36, 30, 28,
    31, 52, 32, 27, 25, 45, 43, 46, 48, 51, 47, 253, 253, 253, 253, 253,
    253, 3, 17, 18, 9, 1, 21, 11, 19, 5, 22, 15, 10, 14, 2, 8,
    16, 50, 6, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
    116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131,
    253, 253, 253, 253, 253, 253, 253, 132, 253, 253, 253, 253, 253, 253, 133, 134,
    253, 253, 253, 253, 253, 135, 253, 253, 253, 136, 253, 137, 138, 139, 140, 141,
    253, 253, 253, 253, 142, 253, 253, 253, 253, 253, 253, 143, 144, 145, 146, 147,
    253, 253, 253, 253, 253, 253, 253, 253, 148, 149, 253, 253, 253, 253, 150, 151,
    253, 253, 253, 253, 253, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162,
    251, 163, 164, 165, 166, 167, 168, 253, 253, 253, 253, 253, 253, 253, 253, 169,
];

pub(crate) static MACROMAN_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Dutch",
    char_to_order_map: &MACROMAN_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_DUTCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 37, 39, 29, 26, 44, 34, 42, 35, 49, 40, 38, 36, 30, 28,
    31, 52, 32, 27, 25, 45, 43, 46, 48, 51, 47, 253, 253, 253, 253, 253,
    253, 3, 17, 18, 9, 1, 21, 11, 19, 5, 22, 15, 10, 14, 2, 8,
    16, 50, 6, 7, 4, 13, 12, 20, 41, 33, 24, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 102, 253, 103, 255, 104, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 106, 255, 107, 108,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 109, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 110, 253, 253, 253, 252, 111, 253, 252, 252, 252, 253,
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127,
    128, 129, 130, 131, 132, 133, 134, 253, 135, 136, 137, 138, 139, 140, 141, 142,
    143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158,
    159, 160, 161, 162, 163, 164, 165, 253, 166, 167, 168, 169, 170, 171, 172, 173,
];

pub(crate) static WINDOWS_1252_DUTCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Dutch",
    char_to_order_map: &WINDOWS_1252_DUTCH_CHAR_TO_ORDER,
    language_model: &DUTCH_LANG_MODEL,
    typical_positive_ratio: 0.971567,
    keep_ascii_letters: true,
    reversed: false,
};
