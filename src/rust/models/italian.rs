// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static ITALIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 1, 3, 1, 1, 1, 2, 1, 1, 1, 0, 0, 1, 3, 2, 1, 2, 3, 0, 1, 0, 3, 1, 3, 0, 1, 1, 1, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 2, 1, 0, 2, 2, 1, 0, 0, 2, 2, 3, 3, 0, 0, 2, 0, 0, 2, 1, 2, 0, 3, 0, 1, 0, 0, 0, 1, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 2, 0, 1, 3, 2, 0, 1, 1, 3, 1, 3, 0, 1, 0, 1, 0, 0, 0, 1, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 3, 0, 1, 3, 2, 1, 1, 0, 3, 0, 3, 0, 0, 0, 1, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 2, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 2, 2, 2, 1, 0, 3, 2, 1, 1, 0, 2, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 2, 0, 2, 0, 3, 0, 0, 1, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 2, 2, 2, 3, 2, 2, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 3, 1, 1, 2, 1, 1, 1, 1, 2, 1, 2, 3, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 3, 1, 1, 3, 1, 0, 1, 1, 2, 0, 1, 3, 1, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 1, 3, 3, 2, 3, 2, 3, 1, 2, 3, 1, 2, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 3, 0, 1, 3, 3, 0, 1, 0, 3, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 3, 1, 0, 2, 1, 1, 1, 0, 2, 1, 2, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 2, 3, 3, 2, 3, 2, 1, 1, 0, 2, 0, 1, 3, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 1, 1, 1, 2, 1, 3, 2, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 2, 3, 2, 3, 3, 2, 2, 3, 2, 2, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 2, 0, 1, 2, 1, 0, 1, 1, 2, 1, 2, 1, 0, 1, 1, 0, 0, 0, 0, 2, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 2, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 2, 0, 0, 2, 1, 0, 0, 0, 2, 0, 2, 0, 0, 1, 1, 0, 1, 3, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2, 2, 3, 3, 1, 3, 1, 1, 3, 2, 3, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 2, 2, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 3, 2, 2, 2, 3, 3, 3, 1, 1, 2, 1, 3, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 2, 3, 2, 3, 3, 1, 1, 2, 2, 3, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 2, 0, 0, 1, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 1, 3, 1, 1, 1, 1, 3, 1, 1, 1, 3, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 3, 1, 2, 3, 1, 1, 2, 0, 3, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 1, 0, 1, 1, 1, 1, 3, 1, 2, 2, 1, 0, 3, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 2, 1, 3, 2, 2, 1, 2, 2, 2, 3, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 3, 1, 0, 1, 0, 0, 0, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 2, 2, 1, 1, 3, 2, 2, 1, 1, 1, 0, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 0, 3, 3, 2, 3, 3, 2, 3, 1, 0, 3, 2, 1, 2, 0, 1, 1, 2, 3, 2, 2, 3, 3, 3, 3, 3, 0, 3, 3, 0, 3, 3, 1, 1, 2, 2, 2, 1, 2, 1, 0, 2, 0, 2, 1, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 1, 0, 2, 3, 0, 3, 3, 2, 1, 2, 1, 1, 1, 2, 3, 3, 3, 3, 3, 3, 3, 2, 2, 0, 3, 3, 1, 1, 2, 1, 1, 2, 1, 2, 1, 2, 0, 0, 2, 2, 1, 2, 1, 0, 1, 0, 3, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0,
    0, 0, 1, 0, 1, 3, 2, 3, 3, 3, 1, 2, 2, 1, 2, 2, 2, 2, 1, 2, 1, 2, 3, 2, 3, 3, 3, 3, 3, 3, 0, 2, 2, 0, 2, 2, 0, 2, 2, 2, 1, 0, 2, 2, 0, 2, 1, 2, 1, 2, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 1, 0, 3, 3, 3, 3, 3, 2, 2, 3, 3, 2, 3, 2, 2, 2, 3, 1, 2, 3, 1, 1, 3, 3, 3, 3, 3, 0, 1, 3, 2, 3, 3, 1, 1, 2, 2, 2, 2, 3, 0, 0, 2, 1, 2, 1, 2, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 1, 1, 0, 0, 0, 3, 0, 0, 0, 1, 0, 1, 0, 1, 3, 2, 3, 3, 3, 2, 2, 1, 1, 0, 3, 2, 1, 1, 2, 1, 0, 1, 2, 2, 0, 1, 0, 0, 1, 1, 1, 1, 2, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 0, 2, 3, 1, 2, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 3, 2, 3, 2, 3, 2, 2, 3, 1, 3, 0, 3, 2, 0, 1, 2, 0, 0, 1, 2, 2, 0, 0, 0, 0, 1, 3, 1, 2, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 3, 2, 1, 2, 0, 3, 0, 0, 0, 1, 0, 0, 0, 2, 3, 2, 3, 3, 2, 2, 3, 2, 3, 0, 3, 2, 3, 2, 2, 0, 0, 1, 3, 2, 0, 1, 0, 1, 0, 3, 1, 2, 2, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 2, 3, 3, 0, 0, 0, 0, 0, 0, 1, 3, 0, 0, 2, 0, 0, 0, 0, 0, 3, 3, 3, 3, 1, 2, 3, 2, 1, 0, 3, 2, 1, 2, 3, 0, 0, 3, 2, 3, 0, 1, 0, 0, 1, 1, 1, 1, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 0, 1, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 1, 3, 2, 3, 3, 3, 2, 3, 2, 2, 0, 3, 2, 1, 2, 2, 0, 0, 3, 2, 2, 0, 1, 1, 0, 2, 1, 1, 1, 0, 0, 1, 1, 0, 0, 2, 1, 1, 0, 0, 0, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 1, 0, 1, 1, 2, 2, 2, 2, 2, 1, 2, 3, 2, 2, 2, 2, 1, 2, 1, 3, 2, 0, 2, 3, 3, 2, 3, 3, 0, 2, 3, 0, 3, 3, 1, 0, 2, 2, 2, 0, 2, 0, 0, 2, 1, 1, 1, 1, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 0, 0, 3, 1, 2, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 2, 3, 2, 3, 3, 2, 2, 2, 2, 3, 0, 3, 2, 2, 2, 2, 1, 1, 3, 1, 2, 1, 2, 0, 0, 0, 1, 1, 2, 3, 0, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 3, 2, 3, 2, 3, 2, 2, 1, 2, 3, 2, 2, 1, 1, 1, 2, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 1, 1, 2, 1, 1, 0, 3, 0, 0, 0, 0, 0, 0, 2, 0, 3, 2, 3, 3, 2, 1, 2, 2, 1, 0, 3, 2, 1, 2, 2, 0, 0, 1, 1, 1, 0, 2, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 2, 1, 1, 1, 1, 3, 2, 3, 3, 2, 1, 2, 2, 2, 0, 3, 2, 1, 2, 2, 0, 0, 1, 2, 1, 0, 2, 0, 0, 1, 2, 2, 1, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 3, 2, 1, 1, 3, 2, 2, 2, 1, 2, 0, 2, 2, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 2, 1, 1, 0, 1, 0, 0, 1, 0, 1, 2, 0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 1, 0, 1, 1, 1, 2, 0, 1, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 2, 2, 3, 1, 2, 0, 2, 3, 1, 0, 1, 0, 0, 1, 2, 2, 3, 2, 3, 2, 2, 2, 2, 3, 2, 0, 2, 2, 1, 2, 2, 0, 0, 2, 1, 1, 1, 2, 0, 0, 1, 2, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 2, 0, 1, 3, 1, 2, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 3, 2, 2, 2, 2, 1, 2, 1, 2, 0, 2, 2, 0, 2, 2, 0, 0, 1, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 1, 3, 2, 2, 3, 2, 2, 0, 0, 1, 2, 2, 1, 1, 1, 2, 0, 2, 3, 2, 1, 3, 2, 3, 2, 3, 0, 2, 2, 1, 3, 1, 1, 0, 2, 2, 2, 0, 2, 1, 0, 0, 1, 1, 2, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 3, 2, 2, 1, 1, 2, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 2, 0, 1, 1, 0, 0, 1, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 3, 0, 2, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 0, 2, 1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 2, 2, 1, 0, 1, 0, 0, 0, 0,
    0, 3, 2, 2, 2, 0, 3, 0, 1, 1, 2, 1, 2, 2, 2, 1, 0, 1, 2, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 2, 0, 1, 1, 1, 0, 1, 0, 2, 0, 2, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 0, 0, 1, 1, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 2, 1, 3, 3, 0, 1, 1, 1, 1, 0, 1, 1, 1, 2, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 3, 0, 0, 1, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 2, 1, 3, 2, 1, 1, 2, 1, 1, 0, 2, 1, 1, 1, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 2, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 2, 1, 2, 1, 1, 2, 2, 1, 1, 0, 1, 2, 0, 2, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 2, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 3, 1, 1, 2, 0, 1, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 1, 0, 2, 1, 0, 0, 0, 1, 2, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 0, 0, 0, 1, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 2, 3, 0, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 2, 2, 3, 1, 1, 0, 1, 1, 1, 2, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 0, 1, 2, 1, 0, 2, 2, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 2, 0, 1, 1, 0, 0, 0, 0, 3, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 3, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 1, 1, 1, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 2, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 1, 1, 0, 1, 0, 1, 1, 0, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP037_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 44, 102, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 56, 107, 108, 30, 109, 110, 111, 59, 112, 253, 253, 253, 253, 253, 253,
    253, 253, 113, 114, 61, 115, 116, 117, 118, 119, 253, 253, 253, 253, 253, 253,
    120, 121, 122, 123, 58, 124, 125, 126, 127, 253, 253, 253, 253, 253, 253, 253,
    128, 4, 19, 10, 11, 1, 17, 15, 20, 2, 253, 253, 129, 130, 131, 253,
    253, 52, 36, 9, 14, 5, 3, 13, 37, 7, 132, 133, 134, 253, 135, 253,
    136, 253, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 137, 138, 139, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 251, 140, 141, 50, 60, 142,
    253, 57, 48, 25, 34, 28, 31, 32, 53, 29, 252, 143, 144, 54, 145, 146,
    253, 253, 22, 27, 40, 45, 51, 47, 55, 49, 252, 147, 148, 149, 150, 151,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 152, 153, 154, 155, 251,
];

pub(crate) static CP037_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Italian",
    char_to_order_map: &CP037_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 44, 102, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 56, 107, 108, 30, 109, 110, 111, 59, 112, 253, 253, 253, 253, 253, 253,
    253, 253, 113, 114, 61, 115, 116, 117, 118, 119, 253, 253, 253, 253, 253, 253,
    120, 121, 122, 123, 58, 124, 125, 126, 127, 253, 253, 253, 253, 253, 253, 253,
    128, 4, 19, 10, 11, 1, 17, 15, 20, 2, 253, 253, 129, 130, 131, 253,
    253, 52, 36, 9, 14, 5, 3, 13, 37, 7, 132, 133, 134, 253, 135, 253,
    136, 253, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 137, 138, 139, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 251, 140, 141, 50, 60, 142,
    253, 57, 48, 25, 34, 28, 31, 32, 53, 29, 252, 143, 144, 54, 145, 146,
    253, 253, 22, 27, 40, 45, 51, 47, 55, 49, 252, 147, 148, 149, 150, 151,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 152, 153, 154, 155, 251,
];

pub(crate) static CP500_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Italian",
    char_to_order_map: &CP500_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 57, 48, 25, 34, 28, 31,
    32, 53, 29, 22, 27, 40, 45, 51, 47, 55, 49, 253, 253, 253, 253, 253,
    253, 4, 19, 10, 11, 1, 17, 15, 20, 2, 52, 36, 9, 14, 5, 3,
    13, 37, 7, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 253, 253, 251,
    100, 101, 56, 102, 103, 44, 104, 105, 106, 107, 30, 108, 109, 59, 110, 111,
    112, 113, 114, 115, 116, 50, 117, 54, 118, 119, 120, 121, 253, 122, 253, 123,
    124, 125, 60, 126, 127, 128, 129, 130, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 131, 132, 61, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    135, 136, 137, 138, 58, 139, 140, 141, 142, 253, 253, 253, 253, 253, 143, 253,
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Italian",
    char_to_order_map: &CP850_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 57, 48, 25, 34, 28, 31,
    32, 53, 29, 22, 27, 40, 45, 51, 47, 55, 49, 253, 253, 253, 253, 253,
    253, 4, 19, 10, 11, 1, 17, 15, 20, 2, 52, 36, 9, 14, 5, 3,
    13, 37, 7, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 253, 253, 251,
    100, 101, 56, 102, 103, 44, 104, 105, 106, 107, 30, 108, 109, 59, 110, 111,
    112, 113, 114, 115, 116, 50, 117, 54, 118, 119, 120, 121, 253, 122, 253, 123,
    124, 125, 60, 126, 127, 128, 129, 130, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 131, 132, 61, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    135, 136, 137, 138, 58, 253, 139, 140, 141, 253, 253, 253, 253, 253, 142, 253,
    143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Italian",
    char_to_order_map: &CP858_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 57, 48, 25, 34, 28, 31,
    32, 53, 29, 22, 27, 40, 45, 51, 47, 55, 49, 253, 253, 253, 253, 253,
    253, 4, 19, 10, 11, 1, 17, 15, 20, 2, 52, 36, 9, 14, 5, 3,
    13, 37, 7, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 100, 253, 101, 253, 102, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 103, 104, 253, 253, 105, 252, 106, 253, 107, 108, 109, 253,
    61, 110, 111, 112, 113, 114, 115, 116, 58, 117, 118, 119, 120, 121, 122, 123,
    124, 125, 126, 127, 128, 129, 130, 253, 131, 132, 133, 134, 135, 136, 137, 138,
    44, 139, 140, 141, 142, 143, 144, 145, 30, 56, 146, 147, 59, 148, 149, 150,
    151, 152, 50, 60, 153, 154, 155, 253, 156, 54, 157, 158, 159, 160, 161, 162,
];

pub(crate) static ISO_8859_15_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Italian",
    char_to_order_map: &ISO_8859_15_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 57, 48, 25, 34, 28, 31,
    32, 53, 29, 22, 27, 40, 45, 51, 47, 55, 49, 253, 253, 253, 253, 253,
    253, 4, 19, 10, 11, 1, 17, 15, 20, 2, 52, 36, 9, 14, 5, 3,
    13, 37, 7, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    61, 103, 104, 105, 106, 107, 108, 109, 58, 110, 111, 112, 113, 114, 115, 116,
    117, 118, 119, 120, 121, 122, 123, 253, 124, 125, 126, 127, 128, 129, 130, 131,
    44, 132, 133, 134, 135, 136, 137, 138, 30, 56, 139, 140, 59, 141, 142, 143,
    144, 145, 50, 60, 146, 147, 148, 253, 149, 54, 150, 151, 152, 153, 154, 155,
];

pub(crate) static ISO_8859_1_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Italian",
    char_to_order_map: &ISO_8859_1_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 57, 48, 25, 34, 28, 31,
    32, 53, 29, 22, 27, 40, 45, 51, 47, 55, 49, 253, 253, 253, 253, 253,
    253, 4, 19, 10, 11, 1, 17, 15, 20, 2, 52, 36, 9, 14, 5, 3,
    13, 37, 7, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 106, 107, 44, 108, 109, 110, 111, 112, 56, 30,
    113, 114, 115, 59, 116, 117, 118, 60, 50, 119, 120, 121, 122, 54, 123, 124,
    253, 253, 253, 253, 253, 253, 253, 125, 253, 253, 253, 253, 253, 253, 126, 127,
    253, 253, 253, 253, 253, 128, 253, 253, 253, 129, 253, 130, 131, 132, 133, 134,
    253, 253, 253, 253, 135, 253, 253, 253, 253, 253, 253, 61, 136, 137, 138, 139,
    253, 253, 253, 253, 253, 253, 253, 253, 140, 141, 253, 253, 253, 253, 142, 143,
    253, 253, 253, 253, 253, 144, 145, 146, 147, 58, 148, 149, 150, 151, 152, 153,
    251, 154, 155, 156, 157, 158, 159, 253, 253, 253, 253, 253, 253, 253, 253, 160,
];

pub(crate) static MACROMAN_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Italian",
    char_to_order_map: &MACROMAN_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_ITALIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 42, 26, 35, 23, 39, 38, 46, 21, 57, 48, 25, 34, 28, 31,
    32, 53, 29, 22, 27, 40, 45, 51, 47, 55, 49, 253, 253, 253, 253, 253,
    253, 4, 19, 10, 11, 1, 17, 15, 20, 2, 52, 36, 9, 14, 5, 3,
    13, 37, 7, 8, 6, 12, 16, 41, 43, 33, 18, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 102, 253, 103, 255, 104, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 106, 255, 107, 108,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 109, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 110, 253, 253, 253, 252, 111, 253, 252, 252, 252, 253,
    61, 112, 113, 114, 115, 116, 117, 118, 58, 119, 120, 121, 122, 123, 124, 125,
    126, 127, 128, 129, 130, 131, 132, 253, 133, 134, 135, 136, 137, 138, 139, 140,
    44, 141, 142, 143, 144, 145, 146, 147, 30, 56, 148, 149, 59, 150, 151, 152,
    153, 154, 50, 60, 155, 156, 157, 253, 158, 54, 159, 160, 161, 162, 163, 164,
];

pub(crate) static WINDOWS_1252_ITALIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Italian",
    char_to_order_map: &WINDOWS_1252_ITALIAN_CHAR_TO_ORDER,
    language_model: &ITALIAN_LANG_MODEL,
    typical_positive_ratio: 0.981321,
    keep_ascii_letters: true,
    reversed: false,
};
