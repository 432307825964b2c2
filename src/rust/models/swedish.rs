// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static SWEDISH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 3, 3, 3, 1, 2, 1, 2, 1, 3, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 1, 1, 3, 3, 3, 1, 3, 1, 1, 1, 3, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 0, 1, 1, 1, 2, 1, 1, 0, 1, 1, 1, 1, 0, 1, 2, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 3, 0, 1, 0, 1, 0, 0, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 3, 3, 2, 0, 1, 0, 1, 0, 3, 2, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 2, 1, 0, 0, 2, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 2, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 1, 1, 3, 3, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 3, 3, 3, 2, 2, 1, 3, 2, 3, 2, 1, 1, 1, 1, 3, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 1, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 3, 3, 2, 1, 1, 1, 1, 1, 2, 2, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 2, 2, 2, 3, 3, 3, 3, 1, 2, 2, 2, 2, 1, 1, 1, 0, 2, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 2, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 2, 2, 3, 3, 3, 2, 2, 3, 3, 2, 1, 1, 1, 1, 2, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 2, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 1, 1, 1, 3, 2, 0, 3, 3, 3, 1, 1, 1, 3, 2, 1, 0, 0, 1, 3, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 1, 3, 2, 1, 2, 2, 2, 3, 2, 1, 2, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 1, 1, 3, 2, 3, 2, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 1, 1, 2, 3, 1, 0, 1, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 3, 1, 3, 3, 3, 0, 3, 3, 3, 2, 2, 3, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 2, 3, 1, 3, 3, 3, 1, 3, 3, 3, 0, 3, 3, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 2, 3, 2, 3, 3, 2, 1, 2, 2, 1, 2, 0, 0, 3, 1, 3, 0, 2, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 3, 3, 3, 3, 1, 3, 1, 1, 2, 2, 2, 1, 3, 2, 3, 2, 3, 1, 2, 3, 1, 0, 1, 1, 3, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 2, 3, 2, 2, 2, 3, 1, 1, 2, 1, 1, 1, 3, 3, 3, 1, 1, 1, 3, 2, 0, 0, 0, 0, 3, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 3, 3, 1, 3, 3, 3, 1, 3, 3, 0, 1, 1, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 2, 3, 3, 3, 2, 2, 3, 3, 1, 3, 1, 2, 0, 1, 3, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 3, 2, 3, 1, 2, 3, 2, 1, 2, 1, 2, 1, 2, 3, 2, 0, 0, 2, 1, 1, 0, 1, 1, 3, 3, 1, 1, 3, 2, 1, 3, 3, 1, 1, 3, 3, 2, 2, 3, 2, 3, 2, 2, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 1, 2, 1, 3, 1, 2, 3, 0, 1, 1, 2, 2, 2, 3, 2, 2, 0, 2, 1, 3, 3, 3, 3, 0, 1, 2, 3, 3, 2, 2, 1, 2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 1, 0, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 1, 3, 3, 1, 1, 0, 3, 0, 0, 0, 0, 0, 2, 2, 1, 1, 1, 0, 2, 0, 3, 3, 2, 3, 0, 2, 2, 3, 3, 1, 3, 2, 3, 2, 2, 2, 2, 2, 2, 1, 1, 2, 2, 1, 0, 2, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 2, 3, 2, 2, 1, 1, 2, 1, 1, 2, 3, 1, 2, 0, 1, 2, 2, 1, 0, 2, 1, 0, 0, 2, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 1, 2, 2, 2, 2, 3, 1, 0, 1, 1, 0, 0, 3, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 1, 0, 1, 3, 1, 0, 1, 2, 1, 1, 1, 1, 0, 1, 2, 3, 2, 1, 0, 1, 2, 2, 3, 2, 2, 0, 1, 3, 2, 3, 2, 1, 2, 2, 2, 1, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 2, 2, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 3, 2, 2, 0, 2, 1, 2, 0, 2, 2, 2, 1, 1, 0, 0, 0, 0, 2, 1, 1, 0, 0, 2, 3, 2, 0, 1, 3, 2, 2, 3, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 3, 2, 2, 1, 2, 2, 1, 0, 1, 2, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 3, 2, 3, 2, 2, 3, 2, 2, 3, 3, 2, 2, 2, 2, 2, 2, 2, 3, 2, 1, 1, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 0, 1, 2, 0, 0, 1, 2, 0, 1, 0, 0, 0, 1, 2, 2, 1, 0, 0, 1, 1, 2, 3, 3, 3, 0, 0, 1, 3, 2, 2, 1, 2, 2, 3, 1, 1, 1, 3, 2, 1, 2, 3, 1, 1, 1, 2, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 1, 1, 1, 1, 0, 1, 2, 0, 0, 1, 0, 1, 0, 2, 1, 1, 0, 0, 1, 1, 2, 3, 2, 2, 1, 0, 2, 2, 3, 2, 2, 2, 3, 2, 2, 2, 1, 2, 2, 1, 2, 2, 1, 1, 0, 2, 2, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 1, 2, 3, 0, 3, 1, 3, 0, 1, 0, 0, 1, 0, 2, 2, 3, 1, 0, 0, 1, 1, 2, 1, 1, 0, 1, 3, 3, 2, 1, 2, 2, 2, 2, 2, 2, 0, 1, 1, 1, 0, 2, 1, 1, 0, 1, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 2, 2, 1, 2, 1, 1, 1, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 2, 1, 0, 0, 2, 2, 2, 0, 1, 2, 2, 0, 3, 3, 2, 1, 2, 3, 3, 2, 2, 2, 2, 1, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 0, 1, 2, 1, 1, 1, 2, 0, 0, 1, 1, 1, 2, 3, 1, 1, 0, 1, 1, 1, 1, 3, 2, 1, 0, 1, 2, 2, 3, 2, 2, 1, 2, 2, 1, 2, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 1, 3, 2, 0, 0, 2, 0, 0, 0, 0, 0, 1, 2, 1, 2, 1, 1, 1, 2, 1, 3, 2, 2, 0, 1, 2, 2, 3, 3, 1, 1, 2, 2, 2, 2, 1, 1, 1, 2, 1, 1, 1, 1, 0, 1, 1, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 3, 2, 1, 2, 0, 3, 1, 0, 0, 0, 0, 2, 2, 1, 0, 0, 0, 1, 1, 1, 2, 2, 2, 0, 0, 2, 3, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 2, 1, 1, 2, 1, 1, 0, 2, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 1, 1, 2, 2, 1, 2, 0, 3, 1, 0, 1, 0, 0, 1, 3, 2, 2, 0, 1, 2, 0, 1, 2, 2, 2, 0, 0, 1, 1, 2, 2, 1, 1, 2, 1, 1, 2, 0, 1, 2, 1, 2, 1, 0, 0, 0, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 2, 2, 2, 1, 2, 1, 2, 0, 0, 0, 0, 1, 0, 2, 1, 2, 1, 1, 1, 1, 0, 3, 2, 2, 0, 1, 2, 2, 2, 2, 2, 1, 2, 2, 1, 2, 1, 2, 1, 2, 1, 2, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 2, 1, 1, 0, 1, 1, 3, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 2, 0, 1, 2, 2, 2, 0, 0, 2, 2, 2, 1, 2, 1, 3, 2, 1, 2, 3, 1, 2, 1, 1, 2, 2, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 2, 2, 1, 2, 0, 2, 0, 1, 0, 0, 0, 0, 3, 1, 1, 0, 0, 1, 1, 2, 2, 2, 1, 0, 1, 2, 2, 2, 1, 2, 2, 2, 1, 2, 1, 1, 1, 2, 1, 0, 1, 1, 1, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 3, 0, 0, 0, 0, 1, 1, 2, 1, 1, 1, 0, 1, 1, 2, 1, 2, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 2, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 2, 3, 1, 0, 2, 2, 2, 2, 3, 1, 1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 1, 1, 2, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 3, 2, 2, 1, 0, 0, 1, 1, 2, 1, 2, 0, 1, 1, 2, 3, 1, 1, 1, 2, 1, 1, 1, 0, 0, 1, 0, 1, 1, 2, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 2, 0, 0, 1, 2, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 1, 1, 2, 1, 1, 1, 2, 1, 1, 1, 0, 1, 0, 2, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 2, 2, 1, 1, 2, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 0, 2, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 3, 2, 0, 0, 0, 1, 0, 0, 2, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 2, 1, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 2, 1, 1, 0, 1, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 1, 0, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 2, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
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

static CP037_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 18, 101, 102, 103, 23, 104, 105, 253, 253, 253, 253, 253, 253,
    253, 106, 107, 108, 109, 110, 111, 112, 113, 114, 253, 253, 253, 253, 253, 253,
    253, 253, 115, 50, 116, 117, 118, 54, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 122, 123, 124, 125, 126, 127, 128, 129, 253, 253, 253, 253, 253, 253, 253,
    130, 2, 21, 20, 9, 1, 14, 12, 22, 6, 253, 253, 131, 132, 133, 253,
    253, 29, 11, 8, 13, 3, 10, 15, 51, 5, 134, 135, 136, 253, 137, 253,
    138, 253, 7, 4, 17, 16, 139, 28, 24, 48, 253, 253, 140, 141, 142, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 251, 143, 19, 144, 145, 146,
    253, 52, 40, 30, 38, 33, 36, 39, 147, 34, 252, 148, 149, 150, 151, 152,
    253, 253, 26, 27, 45, 44, 153, 47, 49, 154, 252, 155, 53, 156, 157, 158,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 159, 160, 161, 162, 251,
];

pub(crate) static CP037_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Swedish",
    char_to_order_map: &CP037_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};

static CP500_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 18, 101, 102, 103, 23, 104, 105, 253, 253, 253, 253, 253, 253,
    253, 106, 107, 108, 109, 110, 111, 112, 113, 114, 253, 253, 253, 253, 253, 253,
    253, 253, 115, 50, 116, 117, 118, 54, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 122, 123, 124, 125, 126, 127, 128, 129, 253, 253, 253, 253, 253, 253, 253,
    130, 2, 21, 20, 9, 1, 14, 12, 22, 6, 253, 253, 131, 132, 133, 253,
    253, 29, 11, 8, 13, 3, 10, 15, 51, 5, 134, 135, 136, 253, 137, 253,
    138, 253, 7, 4, 17, 16, 139, 28, 24, 48, 253, 253, 140, 141, 142, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 251, 143, 19, 144, 145, 146,
    253, 52, 40, 30, 38, 33, 36, 39, 147, 34, 252, 148, 149, 150, 151, 152,
    253, 253, 26, 27, 45, 44, 153, 47, 49, 154, 252, 155, 53, 156, 157, 158,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 159, 160, 161, 162, 251,
];

pub(crate) static CP500_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Swedish",
    char_to_order_map: &CP500_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};

static CP850_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 52, 40, 30, 38, 33, 36,
    39, 100, 34, 26, 27, 45, 44, 101, 47, 49, 102, 253, 253, 253, 253, 253,
    253, 2, 21, 20, 9, 1, 14, 12, 22, 6, 29, 11, 8, 13, 3, 10,
    15, 51, 5, 7, 4, 17, 16, 103, 28, 24, 48, 253, 253, 253, 253, 251,
    104, 105, 106, 107, 18, 108, 23, 109, 110, 111, 112, 113, 114, 115, 50, 54,
    116, 117, 118, 119, 19, 120, 121, 122, 123, 53, 124, 125, 253, 126, 253, 127,
    128, 129, 130, 131, 132, 133, 134, 135, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 136, 137, 138, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 139, 140, 253, 253, 253, 253, 253, 253, 253, 253,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 253, 253, 253, 253, 253, 150, 253,
    151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Swedish",
    char_to_order_map: &CP850_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};

static CP858_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 52, 40, 30, 38, 33, 36,
    39, 100, 34, 26, 27, 45, 44, 101, 47, 49, 102, 253, 253, 253, 253, 253,
    253, 2, 21, 20, 9, 1, 14, 12, 22, 6, 29, 11, 8, 13, 3, 10,
    15, 51, 5, 7, 4, 17, 16, 103, 28, 24, 48, 253, 253, 253, 253, 251,
    104, 105, 106, 107, 18, 108, 23, 109, 110, 111, 112, 113, 114, 115, 50, 54,
    116, 117, 118, 119, 19, 120, 121, 122, 123, 53, 124, 125, 253, 126, 253, 127,
    128, 129, 130, 131, 132, 133, 134, 135, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 136, 137, 138, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 139, 140, 253, 253, 253, 253, 253, 253, 253, 253,
    141, 142, 143, 144, 145, 253, 146, 147, 148, 253, 253, 253, 253, 253, 149, 253,
    150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Swedish",
    char_to_order_map: &CP858_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_15_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 52, 40, 30, 38, 33, 36,
    39, 100, 34, 26, 27, 45, 44, 101, 47, 49, 102, 253, 253, 253, 253, 253,
    253, 2, 21, 20, 9, 1, 14, 12, 22, 6, 29, 11, 8, 13, 3, 10,
    15, 51, 5, 7, 4, 17, 16, 103, 28, 24, 48, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 104, 253, 105, 253, 106, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 107, 108, 253, 253, 109, 252, 110, 253, 111, 112, 113, 253,
    114, 115, 116, 117, 50, 54, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127,
    128, 129, 130, 131, 132, 133, 53, 253, 134, 135, 136, 137, 138, 139, 140, 141,
    142, 143, 144, 145, 18, 23, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155,
    156, 157, 158, 159, 160, 161, 19, 253, 162, 163, 164, 165, 166, 167, 168, 169,
];

pub(crate) static ISO_8859_15_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Swedish",
    char_to_order_map: &ISO_8859_15_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_1_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 52, 40, 30, 38, 33, 36,
    39, 100, 34, 26, 27, 45, 44, 101, 47, 49, 102, 253, 253, 253, 253, 253,
    253, 2, 21, 20, 9, 1, 14, 12, 22, 6, 29, 11, 8, 13, 3, 10,
    15, 51, 5, 7, 4, 17, 16, 103, 28, 24, 48, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 104, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 105, 253, 253, 253, 252, 106, 253, 252, 252, 252, 253,
    107, 108, 109, 110, 50, 54, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120,
    121, 122, 123, 124, 125, 126, 53, 253, 127, 128, 129, 130, 131, 132, 133, 134,
    135, 136, 137, 138, 18, 23, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148,
    149, 150, 151, 152, 153, 154, 19, 253, 155, 156, 157, 158, 159, 160, 161, 162,
];

pub(crate) static ISO_8859_1_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Swedish",
    char_to_order_map: &ISO_8859_1_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};

static MACROMAN_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 52, 40, 30, 38, 33, 36,
    39, 100, 34, 26, 27, 45, 44, 101, 47, 49, 102, 253, 253, 253, 253, 253,
    253, 2, 21, 20, 9, 1, 14, 12, 22, 6, 29, 11, 8, 13, 3, 10,
    15, 51, 5, 7, 4, 17, 16, 103, 28, 24, 48, 253, 253, 253, 253, 251,
    50, 54, 104, 105, 106, 53, 107, 108, 109, 110, 18, 111, 23, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 19, 125, 126, 127, 128, 129,
    253, 253, 253, 253, 253, 253, 253, 130, 253, 253, 253, 253, 253, 253, 131, 132,
    253, 253, 253, 253, 253, 133, 253, 253, 253, 134, 253, 135, 136, 137, 138, 139,
    253, 253, 253, 253, 140, 253, 253, 253, 253, 253, 253, 141, 142, 143, 144, 145,
    253, 253, 253, 253, 253, 253, 253, 253, 146, 147, 253, 253, 253, 253, 148, 149,
    253, 253, 253, 253, 253, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160,
    251, 161, 162, 163, 164, 165, 166, 253, 253, 253, 253, 253, 253, 253, 253, 167,
];

pub(crate) static MACROMAN_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Swedish",
    char_to_order_map: &MACROMAN_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1252_SWEDISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 25, 43, 42, 37, 32, 35, 41, 46, 31, 52, 40, 30, 38, 33, 36,
    39, 100, 34, 26, 27, 45, 44, 101, 47, 49, 102, 253, 253, 253, 253, 253,
    253, 2, 21, 20, 9, 1, 14, 12, 22, 6, 29, 11, 8, 13, 3, 10,
    15, 51, 5, 7, 4, 17, 16, 103, 28, 24, 48, 253, 253, 253, 253, 251,
    253, 255, 253, 104, 253, 253, 253, 253, 105, 253, 106, 253, 107, 255, 108, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 109, 253, 110, 255, 111, 112,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 113, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 114, 253, 253, 253, 252, 115, 253, 252, 252, 252, 253,
    116, 117, 118, 119, 50, 54, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129,
    130, 131, 132, 133, 134, 135, 53, 253, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 18, 23, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157,
    158, 159, 160, 161, 162, 163, 19, 253, 164, 165, 166, 167, 168, 169, 170, 171,
];

pub(crate) static WINDOWS_1252_SWEDISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Swedish",
    char_to_order_map: &WINDOWS_1252_SWEDISH_CHAR_TO_ORDER,
    language_model: &SWEDISH_LANG_MODEL,
    typical_positive_ratio: 0.966311,
    keep_ascii_letters: false,
    reversed: false,
};
