// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static FINNISH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 0, 0, 3, 3, 3, 3, 0, 1, 0, 1, 1, 1, 1, 1, 1, 3, 0, 3, 1, 0, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 3, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 2, 1, 2, 1, 1, 3, 2, 0, 1, 0, 1, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 1, 1, 1, 0, 1, 0, 2, 0, 0, 0, 0, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 3, 3, 0, 3, 1, 0, 1, 1, 1, 0, 1, 1, 2, 3, 0, 3, 0, 1, 1, 1, 0, 0, 0, 0, 2, 0, 0, 2, 0, 1, 2, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 0, 1, 3, 3, 0, 3, 0, 0, 0, 1, 0, 1, 0, 0, 0, 2, 1, 2, 0, 1, 0, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 1, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 1, 1, 1, 3, 1, 3, 0, 1, 1, 0, 0, 1, 1, 1, 1, 3, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 1, 1, 2, 3, 3, 3, 0, 2, 0, 1, 1, 1, 0, 1, 1, 3, 1, 1, 1, 0, 1, 1, 0, 1, 0, 1, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 3, 3, 3, 3, 0, 1, 3, 3, 0, 3, 0, 1, 1, 1, 0, 1, 1, 1, 2, 3, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 3, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 1, 1, 2, 2, 3, 1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 2, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 2, 3, 3, 3, 3, 1, 0, 3, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 2, 3, 3, 3, 3, 2, 2, 3, 1, 2, 2, 0, 1, 1, 1, 1, 3, 1, 1, 0, 1, 2, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 0, 1, 3, 3, 2, 3, 0, 1, 1, 2, 1, 0, 0, 0, 1, 2, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 2, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 2, 3, 2, 3, 1, 3, 2, 3, 2, 3, 2, 3, 2, 0, 1, 0, 3, 1, 1, 3, 0, 0, 0, 1, 0, 0, 1, 0, 1, 2, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 1, 1, 3, 1, 3, 0, 3, 2, 2, 0, 3, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 3, 3, 2, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 1, 1, 3, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 2, 2, 3, 2, 3, 2, 3, 3, 2, 1, 3, 3, 2, 2, 2, 1, 1, 2, 2, 1, 2, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 1, 3, 3, 1, 1, 3, 2, 3, 2, 0, 0, 1, 1, 1, 2, 2, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 2, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 1, 1, 3, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 3, 1, 1, 3, 1, 3, 1, 3, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 1, 0, 3, 0, 3, 0, 3, 3, 0, 1, 3, 1, 0, 2, 0, 3, 3, 0, 0, 1, 1, 3, 3, 3, 2, 3, 3, 1, 2, 2, 0, 2, 0, 2, 1, 2, 2, 3, 3, 1, 2, 1, 3, 1, 1, 2, 0, 0, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 1, 2, 2, 3, 1, 2, 1, 1, 2, 3, 0, 1, 1, 0, 3, 2, 0, 0, 0, 2, 3, 3, 3, 2, 3, 2, 2, 2, 1, 0, 2, 0, 2, 2, 2, 2, 2, 1, 2, 3, 1, 2, 1, 1, 2, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 1, 3, 3, 3, 1, 0, 2, 1, 0, 2, 1, 1, 1, 3, 1, 0, 2, 1, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 1, 1, 3, 3, 1, 2, 2, 2, 2, 1, 0, 0, 1, 2, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 0, 2, 3, 3, 2, 3, 0, 3, 2, 2, 3, 1, 3, 1, 2, 2, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 3, 3, 2, 3, 0, 3, 2, 1, 1, 2, 2, 3, 1, 1, 0, 1, 1, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 1, 3, 3, 0, 2, 1, 1, 0, 2, 1, 1, 0, 2, 2, 2, 0, 3, 3, 0, 1, 0, 1, 2, 2, 2, 2, 2, 3, 2, 2, 3, 1, 3, 2, 3, 3, 2, 2, 1, 2, 2, 1, 0, 2, 1, 2, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 2, 3, 3, 2, 3, 0, 1, 0, 1, 2, 1, 0, 3, 2, 3, 2, 3, 3, 2, 1, 0, 1, 0, 2, 2, 3, 3, 3, 1, 2, 3, 2, 3, 0, 3, 2, 2, 2, 2, 2, 1, 2, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 1, 3, 2, 0, 3, 2, 2, 0, 3, 2, 2, 0, 2, 2, 1, 1, 3, 3, 1, 0, 0, 1, 1, 1, 2, 2, 2, 3, 2, 2, 2, 2, 2, 0, 3, 2, 3, 2, 3, 1, 2, 2, 0, 1, 2, 2, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 3, 1, 0, 3, 2, 3, 1, 2, 3, 0, 2, 3, 0, 0, 1, 0, 2, 3, 0, 0, 0, 0, 3, 3, 3, 2, 3, 2, 0, 2, 2, 0, 2, 0, 2, 1, 1, 3, 2, 1, 2, 1, 0, 1, 1, 1, 2, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 1, 2, 3, 0, 2, 0, 2, 1, 2, 2, 0, 0, 2, 1, 1, 0, 3, 3, 1, 0, 0, 2, 3, 2, 2, 2, 2, 2, 2, 2, 3, 0, 3, 0, 2, 3, 2, 3, 1, 3, 2, 2, 0, 0, 2, 2, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 3, 1, 1, 3, 1, 3, 1, 2, 1, 0, 1, 2, 0, 0, 0, 0, 2, 3, 0, 0, 2, 0, 2, 3, 3, 2, 3, 3, 0, 2, 2, 0, 1, 0, 1, 2, 1, 1, 3, 2, 0, 1, 0, 1, 1, 1, 2, 1, 1, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 3, 1, 0, 2, 0, 1, 0, 3, 1, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 2, 2, 3, 1, 2, 1, 1, 0, 2, 0, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 0, 0, 3, 0, 3, 0, 3, 2, 0, 0, 2, 0, 0, 1, 0, 1, 2, 0, 0, 0, 0, 3, 3, 2, 2, 2, 1, 0, 2, 1, 0, 0, 0, 1, 1, 2, 2, 3, 1, 0, 0, 0, 1, 0, 0, 2, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 2, 0, 3, 1, 3, 0, 3, 0, 0, 1, 1, 0, 0, 0, 0, 2, 2, 0, 0, 1, 1, 3, 3, 3, 2, 3, 2, 1, 0, 2, 0, 2, 0, 1, 2, 2, 2, 2, 1, 1, 1, 0, 1, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 2, 1, 3, 2, 3, 0, 1, 3, 2, 0, 1, 2, 2, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0, 1, 2, 1, 1, 0, 0, 0, 3, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 2, 0, 1, 2, 0, 2, 0, 3, 1, 0, 0, 2, 0, 0, 0, 0, 3, 2, 0, 0, 0, 0, 2, 3, 2, 1, 3, 2, 1, 2, 2, 0, 2, 0, 1, 2, 1, 2, 3, 2, 2, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 2, 1, 1, 1, 1, 1, 1, 0, 1, 2, 0, 1, 1, 2, 1, 1, 0, 0, 2, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 0, 1, 2, 0, 2, 0, 0, 0, 1, 0, 2, 1, 0, 1, 0, 3, 2, 0, 0, 0, 0, 3, 3, 2, 2, 2, 2, 2, 2, 3, 0, 1, 1, 2, 1, 1, 2, 2, 2, 3, 2, 0, 2, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 3, 0, 0, 2, 1, 1, 0, 0, 2, 1, 2, 2, 0, 0, 1, 1, 2, 2, 0, 0, 0, 0, 3, 3, 2, 2, 2, 2, 2, 1, 1, 1, 2, 0, 2, 2, 2, 2, 1, 2, 1, 1, 2, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 2, 1, 0, 2, 1, 3, 0, 0, 2, 0, 0, 1, 1, 0, 1, 0, 2, 2, 0, 0, 0, 1, 2, 2, 2, 1, 3, 2, 0, 0, 2, 0, 1, 0, 2, 1, 1, 2, 1, 2, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 2, 0, 0, 3, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 2, 0, 2, 2, 0, 0, 0, 0, 2, 3, 2, 2, 2, 2, 1, 2, 1, 0, 1, 0, 2, 2, 0, 2, 1, 2, 1, 2, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 1, 2, 2, 0, 1, 2, 2, 0, 1, 0, 0, 0, 1, 1, 1, 1, 3, 3, 2, 1, 0, 0, 2, 2, 1, 1, 2, 2, 1, 3, 2, 0, 2, 1, 2, 1, 1, 1, 2, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 1, 1, 0, 3, 2, 2, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 2, 1, 0, 0, 0, 1, 1, 2, 2, 2, 2, 2, 0, 1, 1, 0, 1, 0, 2, 2, 0, 2, 2, 3, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 1, 1, 1, 1, 2, 0, 0, 2, 0, 0, 0, 2, 0, 1, 0, 2, 2, 0, 0, 0, 0, 2, 2, 2, 2, 2, 1, 0, 1, 2, 0, 3, 0, 2, 1, 2, 2, 2, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 1, 0, 2, 3, 0, 0, 2, 0, 2, 0, 1, 1, 2, 0, 2, 0, 0, 1, 0, 2, 1, 0, 0, 0, 2, 2, 2, 3, 1, 2, 1, 1, 1, 2, 0, 1, 0, 1, 2, 0, 2, 1, 1, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 3, 2, 1, 3, 1, 0, 1, 0, 2, 1, 0, 1, 1, 1, 2, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 1, 3, 0, 2, 0, 2, 1, 0, 0, 1, 0, 3, 0, 2, 2, 0, 0, 0, 0, 0, 0, 1, 2, 1, 2, 1, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 1, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 3, 0, 1, 3, 0, 2, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 2, 2, 2, 2, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 0, 0, 0, 1, 0, 1, 2, 2, 1, 1, 0, 2, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 1, 1, 0, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 2, 0, 2, 1, 0, 3, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 2, 0, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 2, 1, 2, 1, 1, 1, 0, 1, 2, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 3, 2, 0, 0, 1, 1, 2, 0, 0, 0, 2, 0, 2, 1, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 2, 0, 0, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 1, 1, 0, 0, 2, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 2, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP037_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 11, 101, 102, 103, 59, 104, 105, 253, 253, 253, 253, 253, 253,
    253, 106, 107, 108, 109, 110, 111, 112, 113, 114, 253, 253, 253, 253, 253, 253,
    253, 253, 115, 50, 116, 117, 118, 61, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 122, 123, 124, 125, 126, 127, 128, 129, 253, 253, 253, 253, 253, 253, 253,
    130, 4, 22, 25, 16, 3, 35, 23, 18, 1, 253, 253, 131, 132, 133, 253,
    253, 19, 10, 8, 13, 6, 7, 17, 56, 12, 134, 135, 136, 253, 137, 253,
    138, 253, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 139, 140, 141, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 251, 142, 24, 143, 144, 145,
    253, 48, 33, 31, 34, 36, 27, 29, 55, 38, 252, 146, 147, 148, 149, 150,
    253, 253, 21, 20, 42, 32, 51, 49, 47, 54, 252, 151, 57, 152, 153, 154,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 155, 156, 157, 158, 251,
];

pub(crate) static CP037_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Finnish",
    char_to_order_map: &CP037_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.973286,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 11, 101, 102, 103, 59, 104, 105, 253, 253, 253, 253, 253, 253,
    253, 106, 107, 108, 109, 110, 111, 112, 113, 114, 253, 253, 253, 253, 253, 253,
    253, 253, 115, 50, 116, 117, 118, 61, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 122, 123, 124, 125, 126, 127, 128, 129, 253, 253, 253, 253, 253, 253, 253,
    130, 4, 22, 25, 16, 3, 35, 23, 18, 1, 253, 253, 131, 132, 133, 253,
    253, 19, 10, 8, 13, 6, 7, 17, 56, 12, 134, 135, 136, 253, 137, 253,
    138, 253, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 139, 140, 141, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 251, 142, 24, 143, 144, 145,
    253, 48, 33, 31, 34, 36, 27, 29, 55, 38, 252, 146, 147, 148, 149, 150,
    253, 253, 21, 20, 42, 32, 51, 49, 47, 54, 252, 151, 57, 152, 153, 154,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 155, 156, 157, 158, 251,
];

pub(crate) static CP500_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Finnish",
    char_to_order_map: &CP500_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.973286,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 48, 33, 31, 34, 36, 27,
    29, 55, 38, 21, 20, 42, 32, 51, 49, 47, 54, 253, 253, 253, 253, 253,
    253, 4, 22, 25, 16, 3, 35, 23, 18, 1, 19, 10, 8, 13, 6, 7,
    17, 56, 12, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 11, 104, 59, 105, 106, 107, 108, 109, 110, 111, 50, 61,
    112, 113, 114, 115, 24, 116, 117, 118, 119, 57, 120, 121, 253, 122, 253, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 132, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 135, 136, 253, 253, 253, 253, 253, 253, 253, 253,
    137, 138, 139, 140, 141, 142, 143, 144, 145, 253, 253, 253, 253, 253, 146, 253,
    147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Finnish",
    char_to_order_map: &CP850_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.973286,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 48, 33, 31, 34, 36, 27,
    29, 55, 38, 21, 20, 42, 32, 51, 49, 47, 54, 253, 253, 253, 253, 253,
    253, 4, 22, 25, 16, 3, 35, 23, 18, 1, 19, 10, 8, 13, 6, 7,
    17, 56, 12, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 11, 104, 59, 105, 106, 107, 108, 109, 110, 111, 50, 61,
    112, 113, 114, 115, 24, 116, 117, 118, 119, 57, 120, 121, 253, 122, 253, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 132, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 135, 136, 253, 253, 253, 253, 253, 253, 253, 253,
    137, 138, 139, 140, 141, 253, 142, 143, 144, 253, 253, 253, 253, 253, 145, 253,
    146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Finnish",
    char_to_order_map: &CP858_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.973286,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 48, 33, 31, 34, 36, 27,
    29, 55, 38, 21, 20, 42, 32, 51, 49, 47, 54, 253, 253, 253, 253, 253,
    253, 4, 22, 25, 16, 3, 35, 23, 18, 1, 19, 10, 8, 13, 6, 7,
    17, 56, 12, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 62, 253, 53, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 60, 101, 253, 253, 58, 252, 102, 253, 103, 104, 105, 253,
    106, 107, 108, 109, 50, 61, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119,
    120, 121, 122, 123, 124, 125, 57, 253, 126, 127, 128, 129, 130, 131, 132, 133,
    134, 135, 136, 137, 11, 59, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147,
    148, 149, 150, 151, 152, 153, 24, 253, 154, 155, 156, 157, 158, 159, 160, 161,
];

pub(crate) static ISO_8859_15_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Finnish",
    char_to_order_map: &ISO_8859_15_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.972797,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 48, 33, 31, 34, 36, 27,
    29, 55, 38, 21, 20, 42, 32, 51, 49, 47, 54, 253, 253, 253, 253, 253,
    253, 4, 22, 25, 16, 3, 35, 23, 18, 1, 19, 10, 8, 13, 6, 7,
    17, 56, 12, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    103, 104, 105, 106, 50, 61, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116,
    117, 118, 119, 120, 121, 122, 57, 253, 123, 124, 125, 126, 127, 128, 129, 130,
    131, 132, 133, 134, 11, 59, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144,
    145, 146, 147, 148, 149, 150, 24, 253, 151, 152, 153, 154, 155, 156, 157, 158,
];

pub(crate) static ISO_8859_1_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Finnish",
    char_to_order_map: &ISO_8859_1_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.973286,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 48, 33, 31, 34, 36, 27,
    29, 55, 38, 21, 20, 42, 32, 51, 49, 47, 54, 253, 253, 253, 253, 253,
    253, 4, 22, 25, 16, 3, 35, 23, 18, 1, 19, 10, 8, 13, 6, 7,
    17, 56, 12, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 253, 253, 251,
    50, 61, 100, 101, 102, 57, 103, 104, 105, 106, 11, 107, 59, 108, 109, 110,
    111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 24, 121, 122, 123, 124, 125,
    253, 253, 253, 253, 253, 253, 253, 126, 253, 253, 253, 253, 253, 253, 127, 128,
    253, 253, 253, 253, 253, 129, 253, 253, 253, 130, 253, 131, 132, 133, 134, 135,
    253, 253, 253, 253, 136, 253, 253, 253, 253, 253, 253, 137, 138, 139, 140, 141,
    253, 253, 253, 253, 253, 253, 253, 253, 142, 143, 253, 253, 253, 253, 144, 145,
    253, 253, 253, 253, 253, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156,
    251, 157, 158, 159, 160, 161, 162, 253, 253, 253, 253, 253, 253, 253, 253, 163,
];

pub(crate) static MACROMAN_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Finnish",
    char_to_order_map: &MACROMAN_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.973286,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_FINNISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 40, 41, 39, 26, 43, 44, 45, 30, 48, 33, 31, 34, 36, 27,
    29, 55, 38, 21, 20, 42, 32, 51, 49, 47, 54, 253, 253, 253, 253, 253,
    253, 4, 22, 25, 16, 3, 35, 23, 18, 1, 19, 10, 8, 13, 6, 7,
    17, 56, 12, 5, 2, 9, 14, 46, 37, 15, 52, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 62, 253, 102, 255, 60, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 53, 253, 103, 255, 58, 104,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 106, 253, 253, 253, 252, 107, 253, 252, 252, 252, 253,
    108, 109, 110, 111, 50, 61, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121,
    122, 123, 124, 125, 126, 127, 57, 253, 128, 129, 130, 131, 132, 133, 134, 135,
    136, 137, 138, 139, 11, 59, 140, 141, 142, 143, 144, 145, 146, 147, 148, 149,
    150, 151, 152, 153, 154, 155, 24, 253, 156, 157, 158, 159, 160, 161, 162, 163,
];

pub(crate) static WINDOWS_1252_FINNISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Finnish",
    char_to_order_map: &WINDOWS_1252_FINNISH_CHAR_TO_ORDER,
    language_model: &FINNISH_LANG_MODEL,
    typical_positive_ratio: 0.972797,
    keep_ascii_letters: true,
    reversed: false,
};
