// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static CZECH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 0, 3, 1, 3, 3, 3, 1, 3, 3, 3, 0, 3, 0, 3, 0, 1, 3, 3, 0, 1, 3, 0, 0, 1, 1, 0, 0, 1, 1, 1, 2, 0, 1, 0, 1, 0, 0, 1, 0, 1, 3, 0, 1, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 0, 3, 1, 3, 3, 3, 2, 2, 3, 2, 0, 3, 0, 3, 0, 1, 3, 3, 0, 2, 3, 0, 1, 1, 1, 0, 1, 1, 1, 1, 3, 0, 1, 1, 1, 0, 1, 1, 0, 0, 2, 1, 0, 0, 2, 0, 0, 0, 1,
    0, 3, 3, 3, 3, 3, 3, 1, 3, 2, 3, 2, 2, 3, 3, 3, 2, 3, 1, 3, 1, 3, 1, 1, 0, 3, 3, 3, 1, 3, 1, 3, 3, 1, 1, 3, 1, 1, 0, 1, 2, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 1, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 0, 3, 3, 3, 2, 3, 3, 3, 0, 3, 0, 3, 0, 1, 3, 3, 1, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 1, 3, 1, 1, 0, 0, 0, 0, 0, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 1, 3, 3, 2, 1, 3, 3, 1, 3, 3, 0, 2, 0, 3, 1, 2, 3, 1, 1, 2, 1, 1, 1, 1, 3, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 0, 3, 3, 3, 2, 3, 3, 1, 0, 1, 1, 0, 0, 0, 1, 2, 1, 1, 1, 2, 0, 1, 1, 0, 2, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 2, 0, 1, 0, 1, 0, 0, 1, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 2, 3, 2, 3, 1, 3, 3, 3, 3, 2, 3, 1, 1, 0, 3, 3, 3, 2, 0, 1, 3, 3, 1, 1, 1, 1, 1, 0, 0, 3, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 1, 3, 2, 3, 3, 3, 1, 3, 3, 2, 1, 3, 0, 3, 0, 1, 3, 3, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 1, 0, 3, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 2, 2, 3, 0, 2, 1, 2, 1, 2, 1, 0, 3, 1, 1, 1, 0, 3, 0, 3, 1, 0, 1, 1, 0, 0, 0, 0, 2, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 3, 3, 3, 3, 2, 3, 1, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 1, 3, 3, 1, 0, 3, 0, 3, 0, 1, 3, 3, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 3, 2, 3, 3, 1, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 1, 0, 3, 1, 2, 1, 0, 1, 2, 3, 1, 1, 1, 0, 1, 1, 1, 2, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 1, 3, 3, 0, 3, 2, 3, 3, 3, 1, 2, 1, 3, 1, 0, 3, 3, 1, 3, 1, 3, 1, 0, 3, 0, 1, 1, 0, 1, 0, 1, 2, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 3, 3, 1, 3, 1, 0, 3, 1, 3, 1, 3, 1, 0, 1, 3, 1, 3, 1, 0, 1, 2, 1, 0, 1, 1, 0, 1, 1, 0, 3, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 3,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 2, 2, 2, 3, 2, 1, 2, 3, 1, 2, 2, 3, 1, 2, 2, 0, 0, 1, 1, 1, 1, 1, 2, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 0, 0, 3, 0, 3, 3, 3, 0, 3, 1, 3, 3, 3, 3, 0, 3, 0, 3, 3, 1, 0, 3, 1, 3, 0, 3, 0, 2, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 2, 2, 3, 2, 2, 1, 1, 0, 1, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1,
    0, 0, 0, 3, 0, 3, 3, 3, 0, 3, 0, 3, 3, 2, 3, 1, 3, 0, 3, 3, 1, 0, 3, 2, 3, 0, 1, 0, 2, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 3, 3, 3, 2, 1, 3, 1, 3, 0, 3, 2, 1, 3, 3, 1, 0, 1, 3, 2, 3, 1, 3, 0, 0, 2, 0, 0, 1, 0, 0, 0, 1, 3, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2,
    0, 3, 3, 2, 3, 3, 3, 2, 3, 1, 2, 3, 1, 3, 1, 3, 2, 1, 1, 1, 1, 2, 3, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 2, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 1, 3, 3, 2, 1, 2, 3, 1, 3, 1, 2, 1, 3, 1, 3, 1, 1, 1, 3, 0, 3, 1, 1, 2, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 3, 1, 3, 3, 2, 1, 3, 1, 3, 1, 3, 2, 0, 2, 0, 3, 2, 3, 0, 3, 1, 1, 1, 2, 0, 3, 0, 0, 1, 2, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 3, 3, 1, 3, 3, 1, 1, 1, 1, 0, 3, 1, 2, 1, 3, 1, 0, 0, 2, 1, 2, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1,
    0, 3, 3, 3, 3, 3, 3, 1, 3, 1, 2, 1, 2, 1, 2, 3, 0, 2, 3, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0,
    0, 2, 3, 2, 3, 1, 1, 0, 3, 0, 1, 0, 0, 2, 0, 3, 0, 3, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 0, 2, 2, 2, 0, 1, 0, 2, 1, 1, 2, 0, 2, 0, 3, 0, 0, 0, 3, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 1, 0, 3, 0, 2, 2, 0, 3, 0, 3, 0, 3, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 3, 3, 3, 0, 2, 1, 1, 2, 1, 1, 0, 2, 0, 3, 3, 2, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 3, 3, 2, 2, 0, 3, 1, 2, 1, 1, 3, 3, 3, 0, 3, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 0, 3, 2, 3, 0, 2, 0, 3, 1, 2, 3, 0, 3, 0, 2, 2, 0, 0, 2, 2, 3, 0, 2, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 2, 0, 1, 3, 2, 1, 1, 2, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 3, 0, 0, 0, 0, 0, 1, 0, 0, 2, 2, 0, 3, 2, 2, 2, 1, 2, 0, 3, 2, 0, 1, 1, 2, 1, 0, 2, 1, 2, 1, 0, 1, 0, 2, 0, 3, 0, 0, 0,
    0, 3, 3, 3, 2, 2, 3, 3, 3, 2, 3, 2, 1, 1, 1, 0, 1, 1, 2, 1, 1, 1, 2, 1, 0, 1, 0, 0, 0, 0, 1, 2, 1, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 2, 3, 2, 2, 3, 1, 0, 3, 2, 1, 2, 1, 2, 0, 3, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 3, 0, 0, 0, 2, 0, 2, 0, 1, 0, 0, 1, 0, 3, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 2, 2, 0, 2, 2, 3, 1, 1, 2, 1, 2, 1, 0, 2, 2, 1, 1, 0, 1, 0, 2, 1, 0, 0, 1, 3, 0, 0, 3, 1, 0,
    0, 3, 3, 1, 2, 3, 0, 1, 2, 2, 2, 2, 2, 2, 1, 1, 0, 0, 2, 2, 1, 2, 2, 1, 0, 1, 1, 1, 0, 0, 2, 0, 0, 1, 2, 1, 3, 3, 2, 1, 0, 2, 1, 3, 2, 0, 1, 1, 3, 1, 1, 2, 1, 1, 1, 1, 2, 0, 0, 1, 0, 2, 0, 0,
    0, 3, 3, 1, 2, 2, 2, 3, 3, 1, 3, 2, 0, 1, 2, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 2, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 1, 1, 1, 0, 2, 0, 1, 2, 2, 2, 0, 1, 0, 1, 1, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 2, 1, 0, 2, 3, 1, 1, 2, 1, 3, 0, 0, 3, 2, 2, 0, 3, 2, 2, 2, 2, 1, 1, 1, 2, 0, 1, 2, 0, 0, 1, 0, 2, 0,
    0, 3, 3, 0, 2, 0, 1, 3, 2, 0, 2, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 3, 1, 0, 1, 1, 0, 1, 0, 1, 2, 0, 0, 1, 1, 0, 2, 2, 2, 2, 0, 3, 1, 2, 1, 0, 2, 1, 2, 1, 1, 1, 1, 1, 2, 1, 2, 0, 1, 0, 1, 1, 0, 0,
    0, 1, 0, 2, 1, 1, 1, 2, 1, 2, 2, 2, 1, 2, 2, 0, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 2, 1, 0, 1, 2, 1, 1, 3, 1, 3, 0, 1, 2, 1, 2, 0, 1, 2, 2, 2, 3, 2, 2, 1, 1, 0, 1, 1, 0, 0, 1, 0, 2, 0,
    0, 2, 3, 0, 1, 0, 1, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2, 2, 0, 3, 2, 2, 1, 1, 3, 1, 2, 2, 0, 3, 1, 2, 2, 1, 1, 1, 2, 1, 1, 0, 1, 0, 0, 0, 2, 0, 0,
    0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 2, 2, 0, 0, 0, 1, 0, 2, 1, 2, 0, 1, 1, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 2, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 2, 2, 1, 1, 3, 1, 2, 0, 1, 2, 1, 3, 2, 1, 2, 3, 2, 2, 2, 1, 2, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0,
    0, 2, 3, 1, 2, 0, 1, 2, 2, 1, 1, 2, 1, 0, 0, 1, 1, 1, 0, 0, 0, 3, 1, 0, 0, 0, 1, 2, 1, 1, 1, 0, 1, 1, 1, 0, 2, 1, 3, 1, 0, 2, 0, 1, 1, 0, 1, 1, 1, 1, 2, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 2, 0, 0,
    0, 1, 0, 2, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 2, 0, 1, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 3, 2, 1, 2, 2, 1, 1, 0, 1, 2, 2, 2, 0, 1, 3, 2, 2, 1, 2, 1, 3, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 3, 2, 1, 2, 2, 1, 1, 1, 0, 1, 1, 0, 0, 1, 2, 2, 0, 0, 0, 0, 1, 3, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 2, 0, 2, 1, 2, 2, 0, 2, 1, 2, 1, 0, 1, 2, 1, 1, 0, 2, 1, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 2, 3, 1, 1, 3, 2, 2, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 0, 1, 1, 2, 1, 1, 1, 1, 1, 2, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 2, 0, 2, 1, 0, 2, 2, 0, 1, 2, 1, 2, 0, 2, 1, 2, 1, 1, 1, 1, 2, 2, 0, 1, 3, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0,
    0, 2, 2, 0, 2, 0, 1, 1, 1, 1, 1, 1, 2, 0, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 2, 1, 0, 2, 1, 2, 2, 1, 2, 1, 2, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0,
    0, 2, 2, 0, 3, 0, 0, 1, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 2, 1, 3, 1, 2, 1, 0, 2, 0, 2, 1, 0, 2, 1, 2, 1, 1, 1, 1, 1, 2, 0, 1, 0, 1, 0, 0, 1, 0, 0,
    0, 2, 2, 1, 3, 0, 2, 1, 2, 0, 2, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 2, 0, 0, 1, 1, 0, 1, 1, 2, 1, 1, 3, 1, 2, 1, 0, 2, 1, 2, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 2, 0, 1,
    0, 2, 1, 2, 3, 1, 1, 1, 1, 2, 1, 1, 1, 2, 2, 2, 0, 2, 2, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 2, 1, 0, 2, 0, 2, 1, 0, 3, 1, 1, 1, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0,
    0, 3, 1, 1, 2, 1, 1, 2, 1, 0, 2, 2, 1, 0, 2, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 2, 1, 3, 1, 0, 1, 0, 1, 2, 0, 2, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1,
    0, 2, 2, 0, 2, 0, 0, 2, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 3, 1, 2, 1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0,
    0, 1, 2, 1, 1, 1, 1, 2, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 2, 2, 0, 1, 2, 1, 2, 0, 2, 1, 2, 1, 1, 2, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 0, 1, 1, 0, 2, 2, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 2, 1, 1, 1, 0, 1, 0, 2, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 3, 1, 2, 1, 2, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 2, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 2, 2, 1, 1, 0, 2, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 2, 0, 0, 0, 0, 1, 0, 0,
    0, 1, 3, 0, 2, 0, 1, 0, 2, 0, 1, 0, 0, 1, 1, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 1, 2, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0,
    0, 0, 0, 1, 0, 1, 2, 2, 0, 2, 0, 2, 1, 1, 2, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 3, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0,
    0, 0, 2, 0, 2, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0,
    0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static ISO_8859_2_CZECH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 38, 52, 44, 47, 41, 54, 53, 56, 43, 57, 51, 48, 49, 33, 36,
    30, 69, 39, 34, 37, 46, 42, 67, 64, 65, 50, 253, 253, 253, 253, 253,
    253, 4, 20, 19, 14, 2, 35, 31, 22, 8, 23, 13, 11, 18, 3, 1,
    9, 70, 7, 6, 5, 10, 12, 55, 45, 21, 16, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 100, 253, 101, 253, 102, 103, 253, 253, 71, 104, 81, 105, 251, 68, 106,
    253, 107, 253, 108, 253, 109, 110, 111, 253, 32, 112, 73, 113, 253, 28, 114,
    115, 61, 116, 117, 118, 119, 120, 121, 62, 74, 122, 123, 72, 58, 124, 125,
    126, 127, 80, 79, 128, 129, 130, 253, 60, 76, 78, 131, 132, 75, 133, 134,
    135, 17, 136, 137, 138, 139, 140, 141, 26, 25, 142, 143, 29, 15, 144, 77,
    145, 146, 66, 63, 147, 148, 149, 253, 24, 40, 59, 150, 151, 27, 152, 253,
];

pub(crate) static ISO_8859_2_CZECH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-2",
    language: "Czech",
    char_to_order_map: &ISO_8859_2_CZECH_CHAR_TO_ORDER,
    language_model: &CZECH_LANG_MODEL,
    typical_positive_ratio: 0.926149,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1250_CZECH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 38, 52, 44, 47, 41, 54, 53, 56, 43, 57, 51, 48, 49, 33, 36,
    30, 69, 39, 34, 37, 46, 42, 67, 64, 65, 50, 253, 253, 253, 253, 253,
    253, 4, 20, 19, 14, 2, 35, 31, 22, 8, 23, 13, 11, 18, 3, 1,
    9, 70, 7, 6, 5, 10, 12, 55, 45, 21, 16, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 71, 253, 100, 81, 68, 101,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 32, 253, 102, 73, 28, 103,
    253, 104, 253, 105, 253, 106, 253, 253, 253, 253, 107, 253, 253, 251, 253, 108,
    253, 253, 253, 109, 253, 110, 253, 253, 253, 111, 112, 253, 113, 253, 114, 115,
    116, 61, 117, 118, 119, 120, 121, 122, 62, 74, 123, 124, 72, 58, 125, 126,
    127, 128, 80, 79, 129, 130, 131, 253, 60, 76, 78, 132, 133, 75, 134, 135,
    136, 17, 137, 138, 139, 140, 141, 142, 26, 25, 143, 144, 29, 15, 145, 77,
    146, 147, 66, 63, 148, 149, 150, 253, 24, 40, 59, 151, 152, 27, 153, 253,
];

pub(crate) static WINDOWS_1250_CZECH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1250",
    language: "Czech",
    char_to_order_map: &WINDOWS_1250_CZECH_CHAR_TO_ORDER,
    language_model: &CZECH_LANG_MODEL,
    typical_positive_ratio: 0.926149,
    keep_ascii_letters: true,
    reversed: false,
};
