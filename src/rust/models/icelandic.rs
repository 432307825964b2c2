// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static ICELANDIC_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 3, 3, 2, 3, 3, 3, 0, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 2, 3, 2, 2, 2, 2, 2, 0, 3, 0, 2, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 2, 3, 2, 3, 2, 3, 0, 3, 3, 0, 3, 0, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 0, 2, 0, 2, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 3, 3, 3, 3, 2, 3, 3, 0, 3, 3, 3, 0, 2, 3, 0, 2, 3, 3, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 0, 3, 3, 3, 0, 3, 3, 3, 3, 3, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 2, 3, 2, 0, 3, 3, 2, 2, 3, 2, 2, 3, 0, 3, 0, 3, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 2, 0, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 0, 1, 3, 2, 2, 0, 3, 2, 2, 2, 0, 2, 0, 3, 2, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 2, 2, 2, 2, 0, 0, 2, 2, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 1, 3, 3, 2, 2, 0, 3, 3, 1, 3, 0, 3, 3, 3, 2, 3, 3, 3, 2, 2, 0, 2, 0, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 2, 2, 3, 2, 3, 2, 3, 3, 0, 2, 0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 3, 3, 3, 3, 2, 3, 3, 0, 2, 2, 0, 2, 2, 3, 3, 0, 2, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 2, 0, 3, 1, 3, 2, 2, 0, 2, 1, 0, 0, 3, 2, 0, 0, 2, 3, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 0, 3, 2, 3, 1, 3, 3, 0, 3, 3, 2, 2, 0, 3, 0, 0, 2, 0, 0, 0, 3, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 2, 1, 3, 3, 3, 3, 3, 3, 2, 1, 3, 2, 0, 2, 2, 0, 2, 3, 2, 0, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 0, 2, 3, 2, 2, 2, 0, 0, 0, 2, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 2, 3, 3, 0, 0, 0, 2, 0, 2, 3, 0, 0, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 3, 3, 3, 0, 3, 0, 3, 0, 0, 3, 0, 0, 3, 0, 2, 2, 2, 3, 0, 0, 0, 0, 0, 2, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 3, 3, 3, 1, 3, 3, 2, 3, 2, 0, 0, 3, 2, 0, 0, 1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 2, 2, 2, 0, 2, 2, 2, 0, 0, 0, 0, 2, 3, 0, 0, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 0, 2, 0, 2, 1, 3, 2, 2, 2, 1, 3, 2, 2, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 3, 3, 3, 3, 3, 0, 3, 2, 2, 2, 0, 0, 3, 2, 2, 0, 2, 1, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 0, 3, 3, 0, 0, 1, 2, 0, 0, 2, 0, 0, 3, 2, 0, 2, 2, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 0, 0, 3, 0, 0, 3, 2, 2, 0, 3, 0, 1, 2, 0, 3, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 2, 3, 3, 3, 3, 3, 3, 0, 0, 2, 0, 0, 3, 2, 3, 0, 2, 0, 0, 2, 0, 2, 2, 2, 3, 2, 1, 2, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 1, 0, 0, 2, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 2, 3, 0, 0, 2, 3, 0, 0, 3, 0, 2, 2, 3, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 2, 0, 3, 3, 2, 0, 3, 0, 0, 2, 2, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 1, 0, 2, 2, 0, 0, 2, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 3, 3, 3, 0, 2, 0, 2, 0, 0, 3, 0, 0, 3, 2, 2, 0, 3, 2, 0, 2, 0, 2, 0, 0, 3, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 3, 3, 0, 0, 0, 2, 0, 0, 3, 0, 0, 2, 2, 0, 0, 2, 2, 0, 0, 1, 0, 1, 1, 2, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 3, 2, 3, 0, 0, 0, 2, 0, 0, 3, 0, 0, 3, 2, 0, 0, 3, 3, 0, 1, 0, 0, 0, 0, 3, 0, 2, 0, 2, 0, 0, 2, 1, 2, 3, 2, 1, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 3, 3, 3, 0, 2, 0, 3, 0, 0, 2, 0, 0, 3, 0, 0, 0, 2, 0, 0, 2, 3, 0, 0, 2, 3, 0, 0, 0, 0, 0, 2, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 3, 3, 0, 0, 0, 2, 0, 2, 3, 0, 2, 3, 2, 0, 0, 0, 2, 0, 0, 3, 0, 2, 0, 2, 3, 0, 0, 0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 3, 3, 3, 1, 2, 0, 3, 0, 0, 3, 0, 1, 2, 2, 3, 2, 0, 2, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0, 2, 0, 0, 2, 1, 0, 3, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 3, 3, 2, 0, 2, 3, 2, 3, 3, 2, 0, 2, 2, 0, 0, 2, 2, 0, 2, 2, 0, 2, 2, 2, 2, 0, 0, 0, 2, 2, 2, 2, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 2, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 3, 2, 3, 0, 3, 0, 2, 0, 0, 0, 0, 0, 2, 2, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 0, 2, 3, 2, 1, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 3, 3, 3, 0, 3, 0, 2, 0, 0, 2, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 2, 0, 0, 2, 2, 2, 3, 2, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 3, 3, 2, 0, 3, 2, 2, 0, 2, 3, 0, 3, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 2, 3, 0, 0, 0, 3, 1, 0, 2, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 0, 2, 3, 3, 0, 2, 2, 0, 2, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 2, 2, 0, 0, 0, 0, 3, 0, 2, 2, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 3, 0, 0, 3, 2, 0, 0, 0, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 2, 2, 2, 0, 2, 2, 3, 2, 0, 2, 0, 2, 2, 0, 0, 2, 0, 0, 2, 2, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 2, 0, 3, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 2, 3, 0, 1, 0, 0, 0, 0, 0, 2, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 2, 3, 3, 0, 2, 0, 2, 3, 0, 1, 0, 0, 3, 2, 2, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 0, 2, 3, 0, 0, 0, 2, 0, 0, 2, 0, 0, 2, 2, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 2, 0, 0, 0, 2, 2, 0, 0, 1, 0, 0, 2, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 3, 3, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 3, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 2, 2, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 2, 0, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 2, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 0, 2, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 2, 0, 0, 2, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 0, 0, 2, 3, 2, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 2, 2, 0, 2, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 2, 3, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 3, 0, 0, 3, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 2, 3, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 3, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 2, 0, 0, 2, 0, 2, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 0, 0, 0, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
];

static CP037_ICELANDIC_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 17, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 54, 107, 108, 109, 13, 110, 111, 112, 113, 253, 253, 253, 253, 253, 253,
    253, 253, 114, 115, 116, 61, 117, 118, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 65, 122, 123, 124, 55, 125, 126, 127, 253, 253, 253, 253, 253, 253, 253,
    128, 1, 19, 41, 15, 6, 22, 12, 23, 5, 253, 253, 14, 29, 44, 253,
    253, 27, 9, 8, 11, 2, 16, 25, 129, 4, 130, 131, 39, 253, 64, 253,
    132, 253, 3, 7, 10, 18, 133, 52, 21, 134, 253, 253, 66, 63, 60, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 36, 33, 48, 50, 43, 38, 35, 45, 42, 251, 135, 40, 136, 20, 137,
    253, 49, 30, 31, 24, 34, 51, 37, 138, 46, 252, 139, 140, 141, 28, 142,
    253, 253, 26, 32, 53, 47, 143, 56, 58, 144, 252, 145, 62, 146, 57, 147,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 148, 149, 150, 59, 251,
];

pub(crate) static CP037_ICELANDIC_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Icelandic",
    char_to_order_map: &CP037_ICELANDIC_CHAR_TO_ORDER,
    language_model: &ICELANDIC_LANG_MODEL,
    typical_positive_ratio: 0.946433,
    keep_ascii_letters: false,
    reversed: false,
};

static CP500_ICELANDIC_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 17, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 54, 107, 108, 109, 13, 110, 111, 112, 113, 253, 253, 253, 253, 253, 253,
    253, 253, 114, 115, 116, 61, 117, 118, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 65, 122, 123, 124, 55, 125, 126, 127, 253, 253, 253, 253, 253, 253, 253,
    128, 1, 19, 41, 15, 6, 22, 12, 23, 5, 253, 253, 14, 29, 44, 253,
    253, 27, 9, 8, 11, 2, 16, 25, 129, 4, 130, 131, 39, 253, 64, 253,
    132, 253, 3, 7, 10, 18, 133, 52, 21, 134, 253, 253, 66, 63, 60, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 36, 33, 48, 50, 43, 38, 35, 45, 42, 251, 135, 40, 136, 20, 137,
    253, 49, 30, 31, 24, 34, 51, 37, 138, 46, 252, 139, 140, 141, 28, 142,
    253, 253, 26, 32, 53, 47, 143, 56, 58, 144, 252, 145, 62, 146, 57, 147,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 148, 149, 150, 59, 251,
];

pub(crate) static CP500_ICELANDIC_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Icelandic",
    char_to_order_map: &CP500_ICELANDIC_CHAR_TO_ORDER,
    language_model: &ICELANDIC_LANG_MODEL,
    typical_positive_ratio: 0.946433,
    keep_ascii_letters: false,
    reversed: false,
};

static CP861_ICELANDIC_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 36, 33, 48, 50, 43, 38, 35, 45, 42, 49, 30, 31, 24, 34, 51,
    37, 100, 46, 26, 32, 53, 47, 101, 56, 58, 102, 253, 253, 253, 253, 253,
    253, 1, 19, 41, 15, 6, 22, 12, 23, 5, 27, 9, 8, 11, 2, 16,
    25, 103, 4, 3, 7, 10, 18, 104, 52, 21, 105, 253, 253, 253, 253, 251,
    106, 107, 54, 108, 109, 110, 111, 112, 113, 114, 115, 66, 14, 60, 116, 117,
    65, 39, 64, 118, 40, 44, 119, 63, 29, 62, 120, 121, 253, 122, 253, 123,
    17, 13, 20, 28, 61, 55, 57, 59, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 253, 136, 137, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 138, 252, 253, 253,
];

pub(crate) static CP861_ICELANDIC_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP861",
    language: "Icelandic",
    char_to_order_map: &CP861_ICELANDIC_CHAR_TO_ORDER,
    language_model: &ICELANDIC_LANG_MODEL,
    typical_positive_ratio: 0.946433,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_10_ICELANDIC_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 36, 33, 48, 50, 43, 38, 35, 45, 42, 49, 30, 31, 24, 34, 51,
    37, 100, 46, 26, 32, 53, 47, 101, 56, 58, 102, 253, 253, 253, 253, 253,
    253, 1, 19, 41, 15, 6, 22, 12, 23, 5, 27, 9, 8, 11, 2, 16,
    25, 103, 4, 3, 7, 10, 18, 104, 52, 21, 105, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 106, 107, 108, 109, 110, 111, 253, 112, 113, 114, 115, 116, 251, 117, 118,
    253, 119, 120, 121, 122, 123, 124, 253, 125, 126, 127, 128, 129, 253, 130, 131,
    132, 61, 133, 134, 135, 136, 64, 137, 138, 65, 139, 140, 141, 55, 142, 143,
    66, 144, 145, 57, 146, 147, 62, 148, 149, 150, 59, 151, 152, 63, 60, 153,
    154, 17, 155, 156, 157, 158, 39, 159, 160, 54, 161, 162, 163, 13, 164, 165,
    14, 166, 167, 20, 168, 169, 40, 170, 171, 172, 28, 173, 174, 29, 44, 175,
];

pub(crate) static ISO_8859_10_ICELANDIC_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-10",
    language: "Icelandic",
    char_to_order_map: &ISO_8859_10_ICELANDIC_CHAR_TO_ORDER,
    language_model: &ICELANDIC_LANG_MODEL,
    typical_positive_ratio: 0.946433,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_1_ICELANDIC_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 36, 33, 48, 50, 43, 38, 35, 45, 42, 49, 30, 31, 24, 34, 51,
    37, 100, 46, 26, 32, 53, 47, 101, 56, 58, 102, 253, 253, 253, 253, 253,
    253, 1, 19, 41, 15, 6, 22, 12, 23, 5, 27, 9, 8, 11, 2, 16,
    25, 103, 4, 3, 7, 10, 18, 104, 52, 21, 105, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 106, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 107, 253, 253, 253, 252, 108, 253, 252, 252, 252, 253,
    109, 61, 110, 111, 112, 113, 64, 114, 115, 65, 116, 117, 118, 55, 119, 120,
    66, 121, 122, 57, 123, 124, 62, 253, 125, 126, 59, 127, 128, 63, 60, 129,
    130, 17, 131, 132, 133, 134, 39, 135, 136, 54, 137, 138, 139, 13, 140, 141,
    14, 142, 143, 20, 144, 145, 40, 253, 146, 147, 28, 148, 149, 29, 44, 150,
];

pub(crate) static ISO_8859_1_ICELANDIC_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Icelandic",
    char_to_order_map: &ISO_8859_1_ICELANDIC_CHAR_TO_ORDER,
    language_model: &ICELANDIC_LANG_MODEL,
    typical_positive_ratio: 0.946433,
    keep_ascii_letters: false,
    reversed: false,
};

static MACICELAND_ICELANDIC_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 36, 33, 48, 50, 43, 38, 35, 45, 42, 49, 30, 31, 24, 34, 51,
    37, 100, 46, 26, 32, 53, 47, 101, 56, 58, 102, 253, 253, 253, 253, 253,
    253, 1, 19, 41, 15, 6, 22, 12, 23, 5, 27, 9, 8, 11, 2, 16,
    25, 103, 4, 3, 7, 10, 18, 104, 52, 21, 105, 253, 253, 253, 253, 251,
    106, 107, 108, 65, 109, 62, 110, 17, 111, 112, 113, 114, 115, 116, 54, 117,
    118, 119, 13, 120, 121, 122, 123, 20, 124, 125, 40, 126, 28, 127, 128, 129,
    63, 253, 253, 253, 253, 253, 253, 130, 253, 253, 253, 253, 253, 253, 64, 131,
    253, 253, 253, 253, 253, 132, 253, 253, 253, 133, 253, 134, 135, 136, 39, 137,
    253, 253, 253, 253, 138, 253, 253, 253, 253, 253, 253, 139, 140, 141, 142, 143,
    253, 253, 253, 253, 253, 253, 253, 253, 144, 145, 253, 253, 66, 14, 60, 44,
    29, 253, 253, 253, 253, 146, 147, 61, 148, 149, 55, 150, 151, 152, 57, 153,
    251, 154, 59, 155, 156, 157, 158, 253, 253, 253, 253, 253, 253, 253, 253, 159,
];

pub(crate) static MACICELAND_ICELANDIC_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacIceland",
    language: "Icelandic",
    char_to_order_map: &MACICELAND_ICELANDIC_CHAR_TO_ORDER,
    language_model: &ICELANDIC_LANG_MODEL,
    typical_positive_ratio: 0.946433,
    keep_ascii_letters: false,
    reversed: false,
};
