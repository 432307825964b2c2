// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static BELARUSIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 3, 3, 0, 3, 0, 0, 3, 0, 3, 0, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 2, 2, 3, 3, 3, 3, 3, 2, 0, 3, 0, 0, 2, 0, 0, 3, 0, 2, 1, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 3, 3, 3, 3, 1, 0, 3, 3, 3, 3, 3, 3, 2, 2, 3, 1, 2, 3, 3, 0, 2, 0, 0, 3, 0, 0, 3, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 1, 0, 3, 3, 3, 3, 3, 3, 0, 3, 0, 0, 3, 0, 3, 0, 2, 0, 2, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 1, 3, 3, 3, 1, 3, 2, 3, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0, 1, 0, 0, 2, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 1, 3, 3, 2, 3, 3, 3, 1, 2, 3, 3, 3, 3, 0, 0, 3, 3, 3, 3, 3, 3, 0, 3, 0, 0, 3, 0, 2, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 2, 3, 3, 3, 3, 1, 1, 2, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 3, 3, 3, 2, 2, 3, 3, 3, 2, 3, 3, 2, 2, 2, 2, 3, 3, 2, 2, 2, 0, 2, 0, 0, 2, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 0, 3, 3, 2, 3, 3, 3, 2, 2, 3, 3, 3, 3, 1, 0, 3, 3, 2, 3, 3, 3, 0, 2, 0, 0, 3, 0, 3, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 1, 3, 0, 3, 3, 3, 3, 3, 3, 2, 0, 3, 3, 3, 3, 1, 0, 3, 3, 2, 3, 2, 2, 0, 3, 0, 0, 3, 0, 2, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 3, 2, 3, 1, 0, 2, 0, 3, 3, 3, 2, 2, 1, 3, 0, 0, 2, 1, 1, 2, 0, 0, 2, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 3, 3, 3, 1, 1, 3, 2, 3, 3, 3, 3, 3, 0, 3, 0, 3, 2, 2, 0, 3, 0, 0, 2, 0, 0, 2, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 2, 3, 0, 3, 3, 3, 2, 3, 3, 0, 1, 3, 3, 3, 2, 2, 0, 2, 3, 3, 3, 3, 3, 0, 2, 0, 0, 3, 0, 3, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 0, 3, 3, 3, 2, 3, 3, 2, 1, 3, 3, 3, 3, 3, 0, 3, 3, 3, 2, 3, 3, 0, 3, 0, 0, 3, 0, 3, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 1, 3, 1, 3, 1, 0, 3, 3, 0, 1, 3, 3, 0, 0, 0, 1, 3, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 1, 3, 1, 3, 0, 1, 2, 3, 0, 1, 0, 0, 2, 0, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 2, 0, 3, 3, 1, 0, 0, 3, 2, 0, 0, 0, 1, 0, 1, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 3, 3, 3, 2, 1, 3, 3, 0, 1, 3, 3, 1, 0, 1, 3, 3, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 1, 3, 1, 3, 3, 1, 2, 3, 3, 2, 2, 3, 3, 2, 3, 0, 0, 3, 3, 3, 2, 3, 3, 0, 2, 0, 0, 3, 0, 3, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 2, 3, 0, 3, 2, 3, 3, 3, 3, 1, 0, 3, 3, 3, 3, 0, 0, 2, 2, 3, 1, 2, 1, 0, 2, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 2, 3, 3, 3, 3, 1, 1, 2, 3, 0, 2, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 3, 3, 0, 2, 2, 3, 3, 2, 2, 1, 1, 3, 0, 0, 1, 2, 0, 3, 1, 0, 2, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 0, 0, 3, 3, 2, 2, 1, 1, 2, 2, 1, 1, 2, 0, 2, 0, 0, 2, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 2, 3, 0, 3, 3, 2, 0, 3, 3, 0, 0, 3, 1, 2, 2, 2, 0, 3, 2, 2, 0, 2, 1, 0, 1, 0, 0, 2, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 1, 3, 3, 1, 1, 0, 0, 0, 1, 2, 2, 2, 1, 0, 2, 3, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 1, 3, 0, 3, 3, 1, 2, 3, 3, 2, 1, 2, 3, 1, 3, 0, 0, 2, 2, 2, 0, 2, 0, 0, 1, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 2, 3, 0, 3, 3, 0, 2, 3, 3, 0, 2, 2, 2, 2, 0, 0, 0, 2, 3, 3, 3, 2, 2, 1, 2, 2, 0, 2, 1, 1, 2, 2, 3, 2, 3, 2, 1, 2, 2, 2, 2, 0, 2, 0, 1, 1, 2, 0, 0, 0, 2, 0, 0, 1, 1, 3, 1, 0, 0, 0,
    0, 3, 3, 2, 3, 0, 1, 2, 2, 3, 1, 2, 2, 3, 3, 2, 2, 0, 0, 2, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 0, 1, 1, 2, 3, 2, 1, 0, 3, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 2, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 0, 2, 1, 2, 3, 0, 0, 0, 3, 3, 2, 0, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 2, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 0, 3, 3, 2, 2, 0, 0, 3, 0, 2, 3, 2, 2, 1, 2, 3, 0, 0, 1, 0, 0, 3, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 3, 2, 2, 0, 2, 3, 2, 3, 0, 2, 3, 2, 2, 3, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 1, 0, 0, 2, 0, 0, 0, 2, 0,
    0, 3, 3, 1, 1, 2, 3, 2, 1, 1, 0, 1, 2, 3, 3, 2, 1, 2, 0, 3, 0, 1, 1, 2, 0, 1, 0, 0, 1, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 3, 1, 0, 1, 0, 3, 3, 2, 1, 3, 2, 0, 0, 0, 0, 2, 2, 1, 2, 0, 0, 0, 0, 3, 1, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 1, 0, 2, 1, 0, 0, 2, 0, 0, 0, 2, 1, 1, 2, 0, 0, 0, 2, 0,
    0, 3, 1, 3, 3, 0, 1, 1, 2, 2, 1, 3, 0, 2, 2, 1, 0, 0, 0, 1, 0, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 3, 1, 0, 1, 1, 3, 2, 1, 2, 3, 3, 1, 0, 2, 0, 2, 0, 1, 0, 2, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 1, 0, 0, 0, 2, 1, 1, 2, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 3, 0, 1, 0, 2, 3, 2, 0, 0, 2, 3, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 2, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 3, 0, 3, 0, 1, 3, 2, 0, 0, 3, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 2, 2, 1, 2, 0, 3, 1, 1, 0, 2, 2, 0, 0, 2, 2, 2, 3, 1, 0, 2, 1, 2, 0, 3, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 1, 0, 2, 0, 3, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 3, 1, 3, 0, 0, 0, 0, 0, 2, 2, 0, 1, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 3, 0, 0, 0, 0, 3, 2, 0, 0, 3, 3, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 2, 2, 1, 0, 0, 2, 2, 0,
    0, 3, 0, 3, 1, 0, 3, 1, 2, 1, 0, 0, 0, 2, 3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 1, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 2, 0, 0, 0, 2, 3, 1, 0, 0, 3, 3, 2, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 2, 0, 1, 1, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 2, 0, 2, 0, 2, 1, 0, 0, 2, 2, 0, 0, 3, 2, 0, 1, 0, 0, 1, 2, 1, 2, 1, 2, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 2, 0, 1, 0, 2, 2, 2, 0, 1, 2, 2, 2, 2, 0, 0, 1, 2, 0, 1, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 2, 1, 2, 0, 0, 0, 1, 0,
    0, 2, 2, 2, 2, 2, 0, 3, 2, 0, 1, 2, 2, 2, 0, 2, 2, 2, 0, 2, 0, 2, 2, 2, 1, 1, 1, 0, 0, 1, 0, 2, 0, 2, 0, 0, 2, 0, 0, 2, 0, 1, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 2, 1, 0, 0, 2, 2, 0, 0, 0, 2, 2, 0, 0, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 1, 2, 0, 3, 3, 0, 0, 1, 2, 0, 0, 1, 2, 0, 0, 0, 0, 1, 1, 1, 1, 0, 2, 0, 1, 0, 1, 1, 0, 0, 2, 2, 0, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 0, 2, 2, 0, 2, 0, 0, 2, 0, 0, 0, 2, 2, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0,
    0, 1, 2, 2, 0, 2, 0, 2, 2, 2, 1, 2, 2, 1, 0, 2, 2, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 2, 2, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0,
    0, 3, 0, 2, 0, 2, 2, 0, 2, 0, 0, 2, 0, 2, 2, 2, 2, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 3, 0, 2, 0, 0, 2, 1, 0, 0, 1, 1, 1, 0, 0, 0, 3, 1, 2, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 1, 0, 2, 0, 0, 0, 0, 1, 0, 2, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 1, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 1, 0, 2, 0, 1, 3, 2, 1, 0, 0, 2, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 2, 0, 1, 0, 0, 0, 0,
    0, 0, 0, 2, 1, 2, 0, 2, 2, 0, 0, 0, 1, 0, 0, 0, 1, 2, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 2, 2, 0, 1, 0, 0, 1, 0, 1, 2, 2, 0, 2, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 0, 2, 0, 2, 2, 0, 0, 1, 0, 0, 0, 2, 2, 1, 0, 0, 0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 1, 1, 0, 1, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 1, 2, 0, 2, 0, 0, 0, 0, 0, 2, 0, 1, 0, 2, 0, 2, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 0, 0, 1,
    0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 0, 1, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
];

static CP866_BELARUSIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    27, 37, 39, 44, 41, 58, 60, 46, 152, 59, 30, 42, 36, 34, 56, 29,
    38, 32, 43, 47, 48, 50, 53, 54, 52, 153, 154, 55, 62, 49, 61, 57,
    1, 23, 15, 22, 12, 9, 33, 21, 155, 26, 5, 8, 16, 2, 13, 17,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    3, 7, 11, 14, 35, 28, 18, 25, 31, 156, 157, 6, 20, 19, 40, 10,
    63, 45, 158, 159, 160, 161, 64, 24, 253, 253, 253, 253, 253, 253, 253, 253,
];

pub(crate) static CP866_BELARUSIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP866",
    language: "Belarusian",
    char_to_order_map: &CP866_BELARUSIAN_CHAR_TO_ORDER,
    language_model: &BELARUSIAN_LANG_MODEL,
    typical_positive_ratio: 0.951743,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_5_BELARUSIAN_CHAR_TO_ORDER: [u8; 256] = [
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
    253, 63, 152, 153, 154, 155, 51, 156, 157, 158, 159, 160, 161, 251, 64, 162,
    27, 37, 39, 44, 41, 58, 60, 46, 163, 59, 30, 42, 36, 34, 56, 29,
    38, 32, 43, 47, 48, 50, 53, 54, 52, 164, 165, 55, 62, 49, 61, 57,
    1, 23, 15, 22, 12, 9, 33, 21, 166, 26, 5, 8, 16, 2, 13, 17,
    3, 7, 11, 14, 35, 28, 18, 25, 31, 167, 168, 6, 20, 19, 40, 10,
    253, 45, 169, 170, 171, 172, 4, 173, 174, 175, 176, 177, 178, 253, 24, 179,
];

pub(crate) static ISO_8859_5_BELARUSIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-5",
    language: "Belarusian",
    char_to_order_map: &ISO_8859_5_BELARUSIAN_CHAR_TO_ORDER,
    language_model: &BELARUSIAN_LANG_MODEL,
    typical_positive_ratio: 0.952745,
    keep_ascii_letters: false,
    reversed: false,
};

static MACCYRILLIC_BELARUSIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    27, 37, 39, 44, 41, 58, 60, 46, 152, 59, 30, 42, 36, 34, 56, 29,
    38, 32, 43, 47, 48, 50, 53, 54, 52, 153, 154, 55, 62, 49, 61, 57,
    253, 253, 155, 253, 253, 253, 253, 51, 253, 253, 253, 156, 157, 253, 158, 159,
    253, 253, 253, 253, 4, 160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170,
    171, 172, 253, 253, 173, 253, 253, 253, 253, 253, 253, 174, 175, 176, 177, 178,
    253, 253, 253, 253, 253, 253, 253, 253, 64, 24, 179, 180, 253, 63, 45, 10,
    1, 23, 15, 22, 12, 9, 33, 21, 181, 26, 5, 8, 16, 2, 13, 17,
    3, 7, 11, 14, 35, 28, 18, 25, 31, 182, 183, 6, 20, 19, 40, 253,
];

pub(crate) static MACCYRILLIC_BELARUSIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacCyrillic",
    language: "Belarusian",
    char_to_order_map: &MACCYRILLIC_BELARUSIAN_CHAR_TO_ORDER,
    language_model: &BELARUSIAN_LANG_MODEL,
    typical_positive_ratio: 0.952745,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1251_BELARUSIAN_CHAR_TO_ORDER: [u8; 256] = [
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
    253, 64, 24, 166, 253, 167, 253, 253, 63, 253, 168, 253, 253, 251, 253, 169,
    253, 253, 51, 4, 170, 171, 253, 253, 45, 253, 172, 253, 173, 174, 175, 176,
    27, 37, 39, 44, 41, 58, 60, 46, 177, 59, 30, 42, 36, 34, 56, 29,
    38, 32, 43, 47, 48, 50, 53, 54, 52, 178, 179, 55, 62, 49, 61, 57,
    1, 23, 15, 22, 12, 9, 33, 21, 180, 26, 5, 8, 16, 2, 13, 17,
    3, 7, 11, 14, 35, 28, 18, 25, 31, 181, 182, 6, 20, 19, 40, 10,
];

pub(crate) static WINDOWS_1251_BELARUSIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1251",
    language: "Belarusian",
    char_to_order_map: &WINDOWS_1251_BELARUSIAN_CHAR_TO_ORDER,
    language_model: &BELARUSIAN_LANG_MODEL,
    typical_positive_ratio: 0.952745,
    keep_ascii_letters: false,
    reversed: false,
};
