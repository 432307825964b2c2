// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static POLISH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 1, 3, 0, 3, 3, 1, 1, 1, 0, 1, 0, 0, 0, 0, 3, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 2, 3, 3, 1, 0, 0, 0, 0, 1, 0, 1, 1, 3, 0, 0, 0, 1, 0, 1, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 1, 0, 3, 1, 2, 3, 1, 0, 1, 0, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 2, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 0, 3, 0, 0, 3, 0, 0, 1, 1, 1, 0, 0, 1, 1, 3, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 1, 2, 3, 2, 0, 0, 1, 3, 3, 0, 2, 0, 3, 2, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 3, 2, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3, 2, 1, 3, 0, 3, 1, 3, 0, 3, 0, 2, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 2, 1, 1, 1, 3, 2, 1, 3, 1, 2, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 0, 1, 3, 3, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 1, 0, 0, 2, 2, 3, 0, 1, 3, 3, 1, 3, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 1, 2, 1, 2, 0, 3, 3, 3, 0, 3, 0, 2, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 1, 3, 1, 1, 3, 3, 1, 0, 2, 1, 3, 2, 2, 2, 2, 1, 3, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 3, 3, 3, 2, 3, 3, 3, 1, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 0, 0, 1, 3, 0, 3, 3, 1, 1, 0, 0, 1, 1, 0, 0, 0, 2, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 2, 3, 1, 3, 3, 3, 2, 1, 2, 3, 2, 2, 3, 1, 1, 1, 0, 3, 1, 2, 0, 2, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 0, 1, 3, 2, 3, 3, 2, 2, 3, 3, 1, 0, 2, 1, 2, 0, 2, 2, 1, 0, 3, 0, 1, 1, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 3, 3, 2, 2, 3, 2, 2, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 1, 0, 0, 2, 0, 1, 3, 1, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 2, 2, 3, 3, 2, 2, 3, 3, 3, 3, 2, 1, 2, 3, 0, 0, 1, 2, 2, 0, 1, 0, 2, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 1, 1, 2, 3, 3, 2, 3, 1, 3, 2, 2, 0, 1, 3, 1, 0, 1, 1, 1, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 1, 2, 3, 2, 0, 2, 2, 2, 3, 1, 3, 1, 1, 1, 0, 0, 0, 3, 3, 3, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 2, 2, 2, 1, 1, 2, 3, 3, 3, 2, 1, 2, 2, 3, 0, 2, 2, 2, 0, 3, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 1, 2, 1, 2, 3, 2, 1, 1, 3, 3, 2, 2, 1, 2, 3, 0, 1, 3, 2, 0, 2, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 2, 1, 0, 1, 2, 3, 3, 2, 1, 2, 3, 0, 1, 0, 2, 1, 1, 0, 0, 3, 3, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 2, 1, 0, 0, 0, 3, 3, 1, 0, 3, 2, 3, 1, 0, 0, 1, 0, 0, 0, 1, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 0, 2, 2, 1, 2, 2, 1, 2, 3, 2, 2, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 2, 0, 3, 0, 3, 3, 0, 3, 3, 3, 0, 0, 0, 0, 2, 2, 1, 1, 0, 0, 0, 3, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 2, 0, 3, 1, 3, 1, 0, 3, 3, 3, 0, 0, 0, 0, 3, 1, 1, 2, 0, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 3, 0, 3, 0, 3, 0, 0, 0, 3, 1, 0, 0, 3, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 2, 3, 0, 3, 3, 1, 0, 3, 0, 3, 0, 3, 0, 2, 1, 3, 3, 3, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 2, 3, 0, 1, 2, 0, 2, 1, 1, 2, 3, 3, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 3, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 0, 1, 3, 0, 0, 0, 1, 1, 0, 1, 0, 2, 3, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 2, 0, 0, 1, 2, 2, 3, 2, 3, 2, 2, 1, 0, 2, 3, 3, 2, 1, 2, 2, 0, 1, 2, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0,
    0, 3, 3, 2, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 2, 2, 3, 2, 1, 1, 0, 2, 1, 1, 1, 2, 1, 3, 0, 0, 2, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 1, 0,
    0, 0, 1, 0, 1, 3, 2, 3, 1, 1, 2, 2, 1, 1, 2, 2, 2, 3, 2, 1, 1, 2, 1, 0, 1, 0, 0, 0, 0, 0, 1, 2, 2, 1, 1, 2, 2, 3, 3, 2, 0, 1, 2, 2, 2, 2, 2, 1, 3, 2, 2, 1, 2, 0, 0, 1, 2, 2, 1, 0, 2, 1, 0, 0,
    0, 0, 1, 0, 0, 1, 2, 1, 1, 1, 2, 3, 0, 2, 3, 3, 1, 1, 1, 0, 2, 3, 1, 0, 0, 0, 0, 0, 0, 0, 2, 3, 2, 1, 1, 3, 1, 2, 3, 2, 0, 0, 2, 2, 2, 2, 2, 1, 2, 1, 2, 2, 1, 1, 0, 1, 1, 1, 2, 0, 1, 0, 0, 0,
    0, 2, 2, 2, 2, 1, 1, 1, 3, 1, 3, 3, 2, 2, 2, 0, 2, 1, 1, 1, 0, 0, 2, 0, 2, 0, 1, 0, 0, 0, 1, 2, 1, 2, 2, 2, 2, 3, 1, 1, 0, 2, 2, 2, 1, 1, 1, 2, 2, 1, 2, 1, 1, 2, 0, 2, 2, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 3, 2, 2, 1, 0, 1, 1, 0, 1, 0, 2, 0, 2, 2, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 3, 2, 2, 2, 2, 2, 1, 0, 3, 2, 2, 3, 3, 2, 1, 1, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1,
    0, 3, 2, 3, 3, 0, 1, 3, 1, 2, 1, 0, 3, 1, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 2, 2, 3, 2, 2, 2, 2, 3, 1, 0, 2, 2, 1, 2, 1, 1, 2, 1, 1, 1, 2, 0, 2, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0,
    0, 2, 1, 3, 3, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 2, 1, 3, 3, 2, 2, 2, 2, 1, 0, 2, 2, 2, 1, 1, 2, 2, 3, 1, 2, 2, 1, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 1, 2, 1, 1, 1, 1, 1, 3, 2, 1, 0, 1, 0, 0, 0, 1, 0, 2, 0, 1, 1, 1, 1, 0, 0, 0, 1, 2, 3, 2, 2, 2, 1, 1, 1, 0, 2, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 0, 3, 1, 0, 0, 1, 0, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 0, 2, 2, 1, 0, 0, 1, 2, 0, 0, 1, 1, 1, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 2, 2, 2, 1, 2, 3, 1, 0, 1, 3, 3, 2, 2, 2, 1, 1, 1, 2, 1, 2, 2, 0, 1, 1, 2, 1, 0, 1, 0, 1, 0,
    0, 3, 3, 2, 2, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 2, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 1, 1, 1, 0, 3, 2, 1, 0, 2, 1, 2, 1, 1, 1, 2, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 0, 0, 1, 3, 0, 2, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 1, 2, 2, 2, 2, 1, 2, 1, 0, 2, 1, 2, 2, 2, 1, 2, 2, 0, 1, 1, 3, 2, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1,
    0, 3, 2, 2, 3, 0, 1, 2, 0, 1, 1, 1, 1, 0, 0, 0, 2, 2, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 2, 2, 2, 2, 2, 2, 1, 0, 1, 1, 2, 1, 1, 1, 3, 0, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0,
    0, 2, 2, 2, 3, 0, 0, 2, 2, 1, 0, 0, 2, 0, 1, 1, 2, 2, 0, 1, 1, 1, 2, 2, 1, 0, 0, 0, 1, 0, 0, 1, 2, 2, 2, 2, 2, 2, 2, 1, 0, 2, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 1, 2, 1, 0, 1, 1, 0, 0, 1, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 1, 3, 1, 2, 3, 2, 1, 0, 0, 3, 2, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 0, 2, 3, 2, 2, 2, 2, 2, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 3, 0, 0, 0, 1, 0, 0, 0, 2, 2, 1, 1, 2, 2, 2, 3, 2, 0, 1, 2, 2, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 2, 2, 1, 1, 1, 2, 0, 0, 0, 0, 1, 2, 1, 1, 2, 2, 1, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 1, 1, 0, 1, 3, 0, 3, 0, 1, 1, 0, 2, 0, 0, 2, 0, 0, 1, 0, 0, 2, 1, 0, 0, 1, 0, 1, 1, 0,
    0, 2, 2, 2, 2, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 3, 1, 0, 0, 0, 0, 3, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 2, 1, 1, 2, 1, 1, 0, 0, 1, 2, 2, 1, 1, 2, 1, 0, 0, 1, 0, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 1, 0,
    0, 2, 2, 2, 1, 1, 1, 2, 0, 2, 2, 0, 0, 1, 1, 2, 2, 1, 0, 1, 1, 0, 1, 0, 2, 0, 0, 0, 2, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 2, 1, 1, 1, 1, 1, 2, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 0, 0, 2, 0, 0, 0, 0, 1, 1, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 1, 2, 1, 1, 0, 0, 1, 2, 1, 0, 1, 1, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 2, 1, 2, 1, 1, 2, 1, 1, 0, 0, 2, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 1, 1, 0,
    0, 2, 2, 2, 2, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 2, 2, 1, 1, 2, 0, 1, 0, 2, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 1, 1, 0, 1, 2, 1, 3, 0, 2, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 0, 1, 1, 2, 2, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 2, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 2, 1, 0,
    0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 2, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP852_POLISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 33, 49, 43, 45, 41, 51, 50, 53, 36, 52, 44, 42, 46, 32, 34,
    31, 100, 38, 35, 37, 47, 101, 39, 102, 55, 48, 253, 253, 253, 253, 253,
    253, 1, 21, 13, 15, 3, 30, 20, 24, 2, 19, 11, 17, 18, 5, 4,
    14, 103, 7, 6, 10, 16, 104, 9, 105, 12, 8, 253, 253, 253, 253, 251,
    106, 107, 108, 109, 110, 111, 29, 112, 22, 113, 114, 115, 116, 64, 117, 63,
    118, 119, 120, 121, 122, 123, 124, 58, 27, 125, 126, 127, 128, 56, 253, 129,
    130, 131, 28, 132, 61, 26, 133, 134, 62, 25, 253, 54, 135, 136, 253, 253,
    253, 253, 253, 253, 253, 137, 138, 139, 140, 253, 253, 253, 253, 57, 23, 253,
    253, 253, 253, 253, 253, 253, 141, 142, 253, 253, 253, 253, 253, 253, 253, 253,
    143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 152, 153, 253,
    59, 154, 155, 60, 40, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 253,
    251, 253, 253, 166, 253, 253, 253, 253, 253, 253, 253, 167, 168, 169, 253, 253,
];

pub(crate) static CP852_POLISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP852",
    language: "Polish",
    char_to_order_map: &CP852_POLISH_CHAR_TO_ORDER,
    language_model: &POLISH_LANG_MODEL,
    typical_positive_ratio: 0.959766,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_16_POLISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 33, 49, 43, 45, 41, 51, 50, 53, 36, 52, 44, 42, 46, 32, 34,
    31, 100, 38, 35, 37, 47, 101, 39, 102, 55, 48, 253, 253, 253, 253, 253,
    253, 1, 21, 13, 15, 3, 30, 20, 24, 2, 19, 11, 17, 18, 5, 4,
    14, 103, 7, 6, 10, 16, 104, 9, 105, 12, 8, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 61, 26, 56, 253, 253, 106, 253, 107, 253, 108, 253, 64, 251, 54, 57,
    253, 253, 109, 22, 110, 253, 253, 253, 111, 112, 113, 253, 114, 115, 116, 23,
    117, 118, 119, 120, 121, 63, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131,
    132, 60, 133, 59, 134, 135, 136, 58, 137, 138, 139, 140, 141, 62, 142, 143,
    144, 145, 146, 147, 148, 29, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158,
    159, 40, 160, 28, 161, 162, 163, 27, 164, 165, 166, 167, 168, 25, 169, 170,
];

pub(crate) static ISO_8859_16_POLISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-16",
    language: "Polish",
    char_to_order_map: &ISO_8859_16_POLISH_CHAR_TO_ORDER,
    language_model: &POLISH_LANG_MODEL,
    typical_positive_ratio: 0.959766,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_2_POLISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 33, 49, 43, 45, 41, 51, 50, 53, 36, 52, 44, 42, 46, 32, 34,
    31, 100, 38, 35, 37, 47, 101, 39, 102, 55, 48, 253, 253, 253, 253, 253,
    253, 1, 21, 13, 15, 3, 30, 20, 24, 2, 19, 11, 17, 18, 5, 4,
    14, 103, 7, 6, 10, 16, 104, 9, 105, 12, 8, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 61, 253, 56, 253, 106, 58, 253, 253, 107, 108, 109, 64, 251, 110, 57,
    253, 26, 253, 22, 253, 111, 27, 112, 253, 113, 114, 115, 54, 253, 116, 23,
    117, 118, 119, 120, 121, 122, 63, 123, 124, 125, 62, 126, 127, 128, 129, 130,
    131, 60, 132, 59, 133, 134, 135, 253, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 148, 149, 29, 150, 151, 152, 25, 153, 154, 155, 156, 157,
    158, 40, 159, 28, 160, 161, 162, 253, 163, 164, 165, 166, 167, 168, 169, 253,
];

pub(crate) static ISO_8859_2_POLISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-2",
    language: "Polish",
    char_to_order_map: &ISO_8859_2_POLISH_CHAR_TO_ORDER,
    language_model: &POLISH_LANG_MODEL,
    typical_positive_ratio: 0.959766,
    keep_ascii_letters: false,
    reversed: false,
};

static MACLATIN2_POLISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 33, 49, 43, 45, 41, 51, 50, 53, 36, 52, 44, 42, 46, 32, 34,
    31, 100, 38, 35, 37, 47, 101, 39, 102, 55, 48, 253, 253, 253, 253, 253,
    253, 1, 21, 13, 15, 3, 30, 20, 24, 2, 19, 11, 17, 18, 5, 4,
    14, 103, 7, 6, 10, 16, 104, 9, 105, 12, 8, 253, 253, 253, 253, 251,
    106, 107, 108, 109, 61, 110, 111, 112, 26, 113, 114, 115, 63, 29, 116, 64,
    54, 117, 118, 119, 120, 121, 122, 28, 123, 124, 125, 126, 127, 128, 129, 130,
    253, 253, 62, 253, 253, 253, 253, 131, 253, 253, 253, 25, 253, 253, 132, 133,
    134, 135, 253, 253, 136, 137, 253, 253, 22, 138, 139, 140, 141, 142, 143, 144,
    145, 60, 253, 253, 40, 146, 253, 253, 253, 253, 253, 147, 148, 149, 150, 151,
    253, 253, 253, 253, 253, 253, 253, 253, 152, 153, 154, 155, 253, 253, 156, 157,
    158, 159, 253, 253, 160, 58, 27, 161, 162, 163, 164, 165, 166, 167, 59, 168,
    169, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179, 57, 56, 23, 180, 181,
];

pub(crate) static MACLATIN2_POLISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacLatin2",
    language: "Polish",
    char_to_order_map: &MACLATIN2_POLISH_CHAR_TO_ORDER,
    language_model: &POLISH_LANG_MODEL,
    typical_positive_ratio: 0.959766,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1250_POLISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 33, 49, 43, 45, 41, 51, 50, 53, 36, 52, 44, 42, 46, 32, 34,
    31, 100, 38, 35, 37, 47, 101, 39, 102, 55, 48, 253, 253, 253, 253, 253,
    253, 1, 21, 13, 15, 3, 30, 20, 24, 2, 19, 11, 17, 18, 5, 4,
    14, 103, 7, 6, 10, 16, 104, 9, 105, 12, 8, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 106, 253, 58, 107, 108, 64,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 109, 253, 27, 110, 111, 54,
    253, 112, 253, 56, 253, 61, 253, 253, 253, 253, 113, 253, 253, 251, 253, 57,
    253, 253, 253, 22, 253, 114, 253, 253, 253, 26, 115, 253, 116, 253, 117, 23,
    118, 119, 120, 121, 122, 123, 63, 124, 125, 126, 62, 127, 128, 129, 130, 131,
    132, 60, 133, 59, 134, 135, 136, 253, 137, 138, 139, 140, 141, 142, 143, 144,
    145, 146, 147, 148, 149, 150, 29, 151, 152, 153, 25, 154, 155, 156, 157, 158,
    159, 40, 160, 28, 161, 162, 163, 253, 164, 165, 166, 167, 168, 169, 170, 253,
];

pub(crate) static WINDOWS_1250_POLISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1250",
    language: "Polish",
    char_to_order_map: &WINDOWS_1250_POLISH_CHAR_TO_ORDER,
    language_model: &POLISH_LANG_MODEL,
    typical_positive_ratio: 0.959766,
    keep_ascii_letters: false,
    reversed: false,
};
