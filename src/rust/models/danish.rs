// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static DANISH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 1, 1, 3, 3, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 3, 1, 1, 1, 2, 2, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 3, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 1, 3, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 2, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 2, 0, 1, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 1, 1, 0, 3, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 2, 1, 0, 0, 1, 3, 0, 0, 0, 1, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 3, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 2, 1, 0, 1, 0, 1, 1, 0, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 1, 3, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 3, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 3, 2, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 2, 0, 1, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 0, 2, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 1, 2, 3, 3, 2, 2, 3, 2, 3, 3, 1, 2, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 2, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 2, 0, 1, 3, 3, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 3, 1, 1, 0, 3, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 2, 2, 2, 3, 3, 3, 3, 2, 2, 0, 3, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 3, 2, 2, 3, 2, 3, 2, 3, 2, 2, 2, 3, 3, 2, 3, 2, 3, 0, 2, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 3, 3, 3, 3, 1, 2, 3, 2, 1, 1, 0, 3, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 3, 3, 3, 1, 2, 2, 1, 2, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 2, 0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 2, 2, 3, 2, 1, 3, 1, 2, 2, 2, 0, 1, 2, 1, 1, 3, 0, 2, 1, 1, 2, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 2, 3, 1, 3, 2, 2, 2, 1, 2, 2, 0, 2, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 1, 1, 3, 1, 2, 1, 3, 0, 1, 2, 3, 1, 2, 2, 2, 3, 0, 2, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 1, 3, 1, 1, 3, 2, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 3, 1, 1, 3, 2, 1, 3, 0, 1, 2, 3, 3, 1, 1, 1, 1, 3, 3, 0, 3, 0, 3, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 3, 3, 2, 3, 3, 1, 2, 3, 0, 3, 3, 2, 1, 3, 1, 2, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 0, 3, 3, 0, 3, 2, 1, 3, 1, 3, 0, 3, 1, 3, 0, 1, 0, 0, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 2, 2, 3, 2, 3, 3, 1, 1, 2, 2, 1, 2, 2, 2, 3, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 1, 2, 3, 3, 3, 3, 1, 3, 0, 1, 0, 3, 1, 1, 1, 0, 0, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 1, 3, 3, 1, 3, 3, 0, 3, 2, 0, 0, 1, 3, 2, 2, 0, 3, 1, 2, 2, 2, 0, 2, 1, 3, 2, 3, 2, 2, 1, 3, 2, 1, 2, 2, 2, 2, 2, 2, 2, 0, 2, 2, 2, 1, 0, 1, 0, 2, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 0, 3, 3, 0, 3, 2, 0, 2, 1, 2, 0, 2, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 3, 1, 1, 3, 0, 0, 3, 0, 0, 0, 2, 1, 0, 0, 3, 2, 0, 1, 1, 2, 2, 1, 2, 3, 3, 2, 1, 2, 3, 3, 1, 2, 2, 1, 1, 2, 1, 1, 0, 0, 2, 2, 1, 0, 1, 0, 3, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 3, 2, 1, 2, 3, 1, 3, 2, 0, 1, 3, 2, 2, 1, 2, 1, 1, 1, 0, 0, 2, 1, 2, 0, 3, 1, 2, 2, 3, 3, 1, 3, 3, 2, 2, 2, 2, 0, 2, 3, 0, 3, 2, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 3, 2, 0, 2, 1, 0, 2, 3, 0, 2, 1, 2, 0, 1, 0, 1, 0, 1, 0, 0, 2, 0, 2, 0, 2, 1, 2, 2, 3, 3, 2, 2, 3, 2, 2, 2, 3, 2, 1, 2, 0, 2, 2, 1, 0, 1, 2, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 3, 0, 3, 3, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 2, 0, 2, 2, 0, 2, 2, 1, 1, 2, 3, 2, 2, 3, 2, 2, 0, 2, 0, 0, 2, 3, 2, 1, 0, 0, 2, 1, 0, 0, 1, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 1, 2, 0, 1, 3, 0, 0, 2, 0, 0, 1, 3, 2, 0, 1, 1, 1, 1, 1, 0, 1, 2, 1, 2, 2, 2, 2, 2, 2, 3, 1, 2, 1, 1, 2, 1, 3, 1, 2, 0, 2, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 1, 0, 3, 1, 1, 3, 1, 1, 3, 1, 1, 1, 2, 1, 0, 1, 2, 0, 2, 1, 0, 0, 3, 1, 2, 3, 2, 2, 2, 2, 3, 1, 1, 2, 1, 1, 1, 3, 2, 2, 0, 2, 1, 1, 0, 1, 1, 0, 1, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 3, 2, 1, 2, 2, 1, 1, 2, 1, 2, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 2, 0, 3, 2, 1, 2, 2, 3, 2, 3, 3, 2, 2, 1, 2, 2, 1, 3, 2, 1, 2, 1, 0, 0, 2, 2, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 0, 2, 0, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 1, 1, 0, 0, 3, 1, 2, 2, 3, 2, 2, 2, 3, 2, 2, 2, 2, 1, 2, 2, 3, 3, 1, 2, 2, 1, 1, 0, 1, 1, 2, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 0, 0, 2, 0, 0, 3, 1, 0, 2, 0, 0, 0, 2, 0, 0, 0, 2, 0, 1, 2, 0, 0, 3, 2, 3, 3, 2, 2, 3, 0, 2, 2, 2, 1, 1, 1, 2, 2, 3, 3, 0, 1, 2, 2, 0, 1, 1, 2, 1, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 1, 2, 1, 2, 3, 0, 1, 3, 0, 0, 0, 2, 2, 0, 0, 1, 1, 0, 0, 1, 0, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 2, 2, 2, 1, 2, 3, 2, 2, 0, 0, 2, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 1, 2, 0, 2, 3, 0, 1, 3, 0, 0, 0, 3, 1, 0, 0, 1, 1, 0, 2, 0, 0, 2, 0, 2, 3, 2, 1, 1, 1, 2, 1, 1, 2, 1, 2, 1, 3, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 2, 1, 2, 2, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 2, 1, 0, 1, 0, 0, 2, 1, 1, 2, 2, 2, 1, 2, 2, 2, 0, 1, 0, 1, 2, 2, 2, 1, 0, 0, 1, 1, 0, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 3, 2, 0, 3, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 1, 1, 2, 1, 1, 0, 2, 2, 2, 3, 3, 1, 1, 2, 3, 1, 1, 2, 0, 2, 3, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 2, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 1, 0, 0, 2, 0, 0, 1, 0, 1, 2, 3, 1, 2, 3, 2, 0, 0, 0, 0, 1, 0, 2, 0, 2, 1, 0, 2, 2, 2, 2, 3, 2, 2, 1, 2, 3, 2, 1, 2, 0, 1, 2, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 3, 1, 1, 2, 1, 1, 3, 3, 1, 3, 1, 1, 1, 2, 2, 2, 0, 1, 1, 0, 0, 0, 3, 0, 2, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 1, 1, 2, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 2, 2, 1, 1, 2, 2, 0, 2, 0, 1, 0, 2, 0, 1, 0, 2, 2, 0, 2, 1, 0, 2, 1, 2, 2, 2, 1, 2, 2, 3, 2, 3, 2, 1, 2, 1, 2, 2, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 1, 3, 2, 0, 1, 2, 1, 1, 1, 1, 1, 1, 2, 0, 2, 2, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 0, 3, 1, 0, 2, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 1, 3, 1, 1, 1, 0, 2, 1, 3, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 2, 1, 0, 1, 3, 2, 0, 3, 0, 1, 0, 1, 0, 0, 0, 1, 2, 0, 0, 0, 0, 2, 0, 2, 2, 2, 1, 2, 2, 1, 2, 1, 2, 2, 1, 1, 2, 1, 1, 0, 1, 2, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 0, 1, 1, 0, 0, 2, 1, 0, 2, 0, 0, 1, 2, 3, 0, 0, 1, 0, 1, 2, 1, 2, 1, 1, 2, 2, 2, 1, 1, 1, 2, 1, 1, 1, 0, 0, 1, 2, 1, 0, 0, 1, 1, 2, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 1, 2, 2, 1, 3, 1, 1, 2, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 1, 1, 2, 1, 0, 2, 1, 1, 2, 1, 0, 1, 2, 0, 0, 1, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 2, 1, 1, 1, 1, 1, 1, 1, 0, 2, 1, 1, 2, 1, 1, 1, 0, 0, 1, 1, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 1, 0, 1, 0, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 2, 1, 1, 0, 0, 1, 1, 1, 1, 2, 2, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 0, 0, 2, 0, 0, 2, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 0, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 2, 0, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP037_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 103, 104, 26, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 107, 108, 109, 110, 111, 112, 113, 114, 115, 253, 253, 253, 253, 253, 253,
    253, 253, 116, 117, 118, 119, 120, 58, 121, 122, 253, 253, 253, 253, 253, 253,
    22, 123, 124, 125, 126, 127, 128, 129, 130, 253, 253, 253, 253, 253, 253, 253,
    53, 8, 18, 23, 9, 1, 13, 12, 20, 5, 253, 253, 131, 132, 133, 253,
    253, 24, 10, 7, 14, 3, 11, 17, 56, 2, 134, 135, 21, 253, 55, 253,
    136, 253, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 137, 138, 139, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 251, 140, 141, 142, 143, 144,
    253, 50, 37, 32, 39, 35, 40, 36, 57, 34, 252, 145, 146, 147, 148, 149,
    253, 253, 25, 27, 41, 44, 52, 49, 51, 54, 252, 150, 151, 152, 153, 154,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 155, 156, 157, 158, 251,
];

pub(crate) static CP037_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Danish",
    char_to_order_map: &CP037_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 103, 104, 26, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 107, 108, 109, 110, 111, 112, 113, 114, 115, 253, 253, 253, 253, 253, 253,
    253, 253, 116, 117, 118, 119, 120, 58, 121, 122, 253, 253, 253, 253, 253, 253,
    22, 123, 124, 125, 126, 127, 128, 129, 130, 253, 253, 253, 253, 253, 253, 253,
    53, 8, 18, 23, 9, 1, 13, 12, 20, 5, 253, 253, 131, 132, 133, 253,
    253, 24, 10, 7, 14, 3, 11, 17, 56, 2, 134, 135, 21, 253, 55, 253,
    136, 253, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 137, 138, 139, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 251, 140, 141, 142, 143, 144,
    253, 50, 37, 32, 39, 35, 40, 36, 57, 34, 252, 145, 146, 147, 148, 149,
    253, 253, 25, 27, 41, 44, 52, 49, 51, 54, 252, 150, 151, 152, 153, 154,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 155, 156, 157, 158, 251,
];

pub(crate) static CP500_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Danish",
    char_to_order_map: &CP500_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 50, 37, 32, 39, 35, 40,
    36, 57, 34, 25, 27, 41, 44, 52, 49, 51, 54, 253, 253, 253, 253, 253,
    253, 8, 18, 23, 9, 1, 13, 12, 20, 5, 24, 10, 7, 14, 3, 11,
    17, 56, 2, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 26, 106, 107, 108, 109, 110, 111, 112, 113, 58,
    114, 21, 55, 115, 116, 117, 118, 119, 120, 121, 122, 22, 253, 53, 253, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 132, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 135, 136, 253, 253, 253, 253, 253, 253, 253, 253,
    137, 138, 139, 140, 141, 142, 143, 144, 145, 253, 253, 253, 253, 253, 146, 253,
    147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Danish",
    char_to_order_map: &CP850_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 50, 37, 32, 39, 35, 40,
    36, 57, 34, 25, 27, 41, 44, 52, 49, 51, 54, 253, 253, 253, 253, 253,
    253, 8, 18, 23, 9, 1, 13, 12, 20, 5, 24, 10, 7, 14, 3, 11,
    17, 56, 2, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 26, 106, 107, 108, 109, 110, 111, 112, 113, 58,
    114, 21, 55, 115, 116, 117, 118, 119, 120, 121, 122, 22, 253, 53, 253, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 132, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 135, 136, 253, 253, 253, 253, 253, 253, 253, 253,
    137, 138, 139, 140, 141, 253, 142, 143, 144, 253, 253, 253, 253, 253, 145, 253,
    146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Danish",
    char_to_order_map: &CP858_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static CP865_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 50, 37, 32, 39, 35, 40,
    36, 57, 34, 25, 27, 41, 44, 52, 49, 51, 54, 253, 253, 253, 253, 253,
    253, 8, 18, 23, 9, 1, 13, 12, 20, 5, 24, 10, 7, 14, 3, 11,
    17, 56, 2, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 26, 106, 107, 108, 109, 110, 111, 112, 113, 58,
    114, 21, 55, 115, 116, 117, 118, 119, 120, 121, 122, 22, 253, 53, 253, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 253, 144, 145, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 146, 252, 253, 253,
];

pub(crate) static CP865_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP865",
    language: "Danish",
    char_to_order_map: &CP865_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 50, 37, 32, 39, 35, 40,
    36, 57, 34, 25, 27, 41, 44, 52, 49, 51, 54, 253, 253, 253, 253, 253,
    253, 8, 18, 23, 9, 1, 13, 12, 20, 5, 24, 10, 7, 14, 3, 11,
    17, 56, 2, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 100, 253, 101, 253, 102, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 103, 104, 253, 253, 105, 252, 106, 253, 107, 108, 109, 253,
    110, 111, 112, 113, 114, 58, 55, 115, 116, 117, 118, 119, 120, 121, 122, 123,
    124, 125, 126, 127, 128, 129, 130, 253, 53, 131, 132, 133, 134, 135, 136, 137,
    138, 139, 140, 141, 142, 26, 21, 143, 144, 145, 146, 147, 148, 149, 150, 151,
    152, 153, 154, 155, 156, 157, 158, 253, 22, 159, 160, 161, 162, 163, 164, 165,
];

pub(crate) static ISO_8859_15_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Danish",
    char_to_order_map: &ISO_8859_15_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 50, 37, 32, 39, 35, 40,
    36, 57, 34, 25, 27, 41, 44, 52, 49, 51, 54, 253, 253, 253, 253, 253,
    253, 8, 18, 23, 9, 1, 13, 12, 20, 5, 24, 10, 7, 14, 3, 11,
    17, 56, 2, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    103, 104, 105, 106, 107, 58, 55, 108, 109, 110, 111, 112, 113, 114, 115, 116,
    117, 118, 119, 120, 121, 122, 123, 253, 53, 124, 125, 126, 127, 128, 129, 130,
    131, 132, 133, 134, 135, 26, 21, 136, 137, 138, 139, 140, 141, 142, 143, 144,
    145, 146, 147, 148, 149, 150, 151, 253, 22, 152, 153, 154, 155, 156, 157, 158,
];

pub(crate) static ISO_8859_1_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Danish",
    char_to_order_map: &ISO_8859_1_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 50, 37, 32, 39, 35, 40,
    36, 57, 34, 25, 27, 41, 44, 52, 49, 51, 54, 253, 253, 253, 253, 253,
    253, 8, 18, 23, 9, 1, 13, 12, 20, 5, 24, 10, 7, 14, 3, 11,
    17, 56, 2, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 253, 253, 251,
    100, 58, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 26, 111, 112, 113,
    114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129,
    253, 253, 253, 253, 253, 253, 253, 130, 253, 253, 253, 253, 253, 253, 55, 53,
    253, 253, 253, 253, 253, 131, 253, 253, 253, 132, 253, 133, 134, 135, 21, 22,
    253, 253, 253, 253, 136, 253, 253, 253, 253, 253, 253, 137, 138, 139, 140, 141,
    253, 253, 253, 253, 253, 253, 253, 253, 142, 143, 253, 253, 253, 253, 144, 145,
    253, 253, 253, 253, 253, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156,
    251, 157, 158, 159, 160, 161, 162, 253, 253, 253, 253, 253, 253, 253, 253, 163,
];

pub(crate) static MACROMAN_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Danish",
    char_to_order_map: &MACROMAN_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_DANISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 28, 38, 45, 31, 33, 30, 42, 46, 29, 50, 37, 32, 39, 35, 40,
    36, 57, 34, 25, 27, 41, 44, 52, 49, 51, 54, 253, 253, 253, 253, 253,
    253, 8, 18, 23, 9, 1, 13, 12, 20, 5, 24, 10, 7, 14, 3, 11,
    17, 56, 2, 6, 4, 15, 16, 47, 43, 19, 48, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 102, 253, 103, 255, 104, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 106, 255, 107, 108,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 109, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 110, 253, 253, 253, 252, 111, 253, 252, 252, 252, 253,
    112, 113, 114, 115, 116, 58, 55, 117, 118, 119, 120, 121, 122, 123, 124, 125,
    126, 127, 128, 129, 130, 131, 132, 253, 53, 133, 134, 135, 136, 137, 138, 139,
    140, 141, 142, 143, 144, 26, 21, 145, 146, 147, 148, 149, 150, 151, 152, 153,
    154, 155, 156, 157, 158, 159, 160, 253, 22, 161, 162, 163, 164, 165, 166, 167,
];

pub(crate) static WINDOWS_1252_DANISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Danish",
    char_to_order_map: &WINDOWS_1252_DANISH_CHAR_TO_ORDER,
    language_model: &DANISH_LANG_MODEL,
    typical_positive_ratio: 0.963019,
    keep_ascii_letters: true,
    reversed: false,
};
