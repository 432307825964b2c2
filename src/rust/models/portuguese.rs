// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static PORTUGUESE_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 2, 3, 3, 3, 1, 3, 0, 1, 1, 1, 0, 1, 3, 3, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 2, 3, 2, 0, 3, 0, 1, 0, 1, 3, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 2, 3, 3, 3, 1, 3, 0, 0, 0, 0, 3, 1, 2, 3, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 3, 1, 2, 1, 3, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 1, 3, 3, 2, 0, 3, 1, 0, 0, 1, 0, 1, 3, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 2, 0, 1, 0, 3, 0, 1, 1, 1, 3, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 0, 1, 3, 1, 0, 1, 3, 0, 3, 1, 1, 1, 0, 1, 1, 1, 1, 3, 0, 0, 2, 0, 0, 2, 1, 3, 2, 1, 0, 0, 3, 1, 2, 0, 1, 2, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 1, 1, 3, 0, 0, 1, 3, 1, 3, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 3, 1, 1, 3, 0, 3, 3, 0, 0, 0, 0, 1, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 1, 3, 3, 3, 0, 3, 3, 0, 0, 0, 1, 0, 3, 3, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 2, 0, 2, 2, 1, 1, 2, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 2, 2, 3, 3, 1, 1, 1, 1, 3, 1, 0, 0, 1, 2, 0, 0, 1, 2, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 2, 0, 2, 0, 2, 0, 0, 3, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 1, 1, 3, 1, 0, 0, 3, 1, 2, 2, 1, 1, 1, 2, 1, 0, 1, 3, 0, 1, 2, 1, 0, 3, 3, 2, 0, 3, 1, 1, 2, 0, 1, 1, 0, 3, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 2, 1, 3, 3, 2, 1, 0, 0, 2, 3, 0, 0, 1, 3, 2, 1, 1, 1, 1, 0, 1, 1, 1, 1, 3, 0, 0, 3, 1, 1, 2, 2, 3, 2, 0, 1, 0, 3, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 1, 3, 3, 2, 3, 2, 3, 1, 1, 0, 3, 1, 2, 3, 1, 0, 2, 1, 1, 0, 2, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 2, 0, 0, 3, 1, 0, 3, 0, 1, 1, 0, 0, 0, 3, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 2, 2, 2, 2, 2, 2, 3, 3, 1, 1, 2, 1, 1, 3, 0, 0, 1, 3, 0, 0, 0, 3, 0, 0, 0, 1, 1, 1, 0, 2, 1, 1, 3, 1, 1, 3, 0, 0, 1, 3, 1, 0, 0, 0, 0, 2, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 3, 3, 1, 3, 2, 3, 3, 3, 3, 2, 3, 1, 3, 3, 2, 1, 1, 3, 2, 0, 0, 0, 2, 1, 3, 2, 1, 0, 1, 1, 1, 0, 1, 2, 1, 0, 2, 0, 0, 2, 1, 2, 0, 0, 0, 0, 3, 1, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 1, 3, 3, 2, 3, 3, 3, 1, 1, 1, 2, 1, 1, 3, 3, 1, 2, 0, 1, 1, 1, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 3, 3, 0, 2, 3, 2, 2, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 2, 1, 1, 3, 3, 3, 0, 3, 1, 0, 0, 0, 3, 0, 2, 3, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 1, 0, 2, 0, 1, 3, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 1, 3, 1, 1, 3, 1, 3, 3, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 2, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 1, 1, 1, 1, 2, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 1, 3, 0, 1, 0, 3, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 3, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 1, 3, 2, 1, 3, 1, 2, 1, 1, 3, 0, 1, 1, 1, 0, 1, 0, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 3, 2, 2, 2, 3, 2, 3, 1, 1, 1, 2, 3, 1, 0, 0, 0, 2, 0, 1, 0, 2, 0, 1, 2, 1, 0, 1, 1, 1, 0, 0, 2, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 1, 3, 2, 2, 3, 2, 3, 2, 1, 1, 1, 1, 2, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 2, 1, 0, 1, 1, 1, 0, 1, 2, 0, 0, 3, 0, 0, 1, 1, 3, 0, 3, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 3, 3, 1, 2, 2, 3, 3, 2, 3, 3, 2, 2, 2, 0, 0, 1, 2, 1, 1, 0, 0, 1, 1, 2, 0, 3, 0, 1, 3, 2, 3, 2, 3, 3, 3, 0, 3, 1, 0, 2, 1, 1, 0, 0, 0, 2, 2, 0, 0, 3, 0, 2, 1, 0, 1, 0, 1, 1, 2, 0,
    0, 3, 3, 3, 1, 0, 3, 1, 1, 3, 3, 1, 1, 3, 2, 1, 1, 1, 1, 1, 2, 0, 0, 2, 1, 0, 1, 0, 1, 0, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 3, 1, 1, 0, 3, 3, 1, 3, 1, 2, 2, 3, 0, 0, 3, 2, 0, 0, 3, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 2, 3, 1, 0, 1, 0, 2, 1, 1, 3, 2, 2, 1, 0, 0, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 3, 0, 0, 2, 2, 3, 3, 3, 3, 3, 0, 2, 2, 0, 2, 2, 0, 0, 0, 0, 0, 2, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 3, 3, 1, 1, 3, 2, 2, 2, 2, 1, 2, 1, 1, 0, 0, 1, 0, 0, 1, 3, 0, 2, 1, 3, 0, 3, 2, 0, 2, 2, 3, 2, 3, 2, 2, 0, 3, 2, 0, 2, 2, 0, 0, 0, 0, 1, 2, 1, 0, 0, 0, 3, 1, 0, 1, 0, 1, 1, 1, 0,
    0, 1, 0, 0, 2, 2, 0, 3, 3, 2, 2, 3, 2, 0, 0, 1, 0, 0, 0, 2, 0, 0, 3, 0, 0, 2, 2, 2, 0, 3, 0, 0, 2, 3, 3, 3, 3, 3, 3, 1, 2, 2, 0, 2, 1, 0, 0, 0, 0, 0, 2, 1, 0, 2, 0, 2, 0, 0, 0, 0, 1, 2, 1, 0,
    0, 0, 1, 1, 2, 2, 0, 3, 3, 2, 3, 3, 2, 1, 1, 2, 3, 0, 0, 3, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 1, 2, 0, 0, 2, 2, 1, 1, 2, 3, 0, 2, 2, 2, 0, 0, 0, 2, 0, 1, 3, 3, 3, 2, 3, 0, 0, 3, 2, 2, 2, 0, 2, 1, 2, 2, 1, 2, 2, 2, 1, 0, 1, 0, 0, 2, 2, 0, 2, 1, 1, 0, 1, 1, 2, 2, 1, 0, 1,
    0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 1, 3, 1, 1, 0, 0, 2, 1, 0, 2, 0, 0, 1, 0, 1, 1, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 0, 0, 0, 1, 0, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0, 3, 0, 1, 3, 3, 3, 1, 2, 0, 0, 2, 2, 3, 2, 1, 1, 2, 0, 2, 3, 0, 1, 2, 0, 1, 3, 0, 0, 1, 2, 1, 0, 0, 2, 0, 1, 2, 1, 0, 2, 0, 0,
    0, 2, 3, 3, 2, 1, 2, 1, 0, 2, 1, 0, 2, 0, 2, 1, 0, 0, 3, 0, 0, 0, 3, 0, 0, 3, 2, 2, 0, 2, 0, 0, 2, 2, 2, 2, 1, 2, 1, 0, 2, 1, 2, 1, 2, 0, 0, 0, 0, 0, 1, 3, 0, 1, 0, 1, 1, 0, 2, 0, 0, 0, 1, 1,
    0, 3, 2, 2, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 3, 0, 1, 3, 3, 3, 1, 2, 0, 0, 2, 2, 2, 2, 2, 2, 3, 1, 2, 2, 1, 1, 2, 0, 0, 0, 0, 0, 3, 1, 0, 2, 0, 1, 1, 0, 1, 2, 1, 0, 0, 1,
    0, 3, 3, 3, 3, 1, 2, 0, 0, 0, 0, 0, 2, 0, 1, 0, 2, 0, 1, 0, 0, 0, 3, 0, 2, 3, 3, 3, 0, 2, 0, 0, 2, 2, 3, 2, 2, 2, 2, 1, 2, 1, 0, 1, 2, 1, 1, 1, 0, 0, 2, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 3, 0,
    0, 3, 3, 3, 1, 0, 2, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 3, 0, 0, 1, 0, 2, 0, 0, 3, 2, 2, 2, 2, 0, 0, 3, 2, 1, 1, 2, 3, 2, 0, 1, 2, 1, 1, 3, 0, 2, 1, 0, 0, 2, 2, 0, 1, 0, 1, 0, 0, 1, 2, 0, 0, 0, 1,
    0, 3, 3, 2, 1, 2, 3, 0, 0, 0, 0, 1, 1, 1, 2, 1, 2, 0, 1, 0, 1, 0, 3, 0, 0, 3, 3, 3, 1, 2, 0, 0, 2, 1, 2, 2, 2, 1, 1, 0, 2, 2, 2, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 1, 2, 2, 2, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 2, 2, 0, 1, 0, 1, 0, 0, 0, 2, 0, 1, 1, 1, 0, 0, 0, 3, 0, 2, 2, 3, 3, 1, 2, 0, 0, 2, 1, 1, 2, 1, 2, 2, 1, 2, 1, 1, 2, 1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 0, 0, 3, 2, 1, 2, 2, 3, 2, 3, 2, 1, 1, 0, 1, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 1, 2, 3, 1, 0, 0, 0, 0, 0, 0, 2, 1, 1, 0, 0, 1, 0, 0, 2, 0, 0, 3, 2, 3, 2, 2, 0, 0, 2, 2, 1, 2, 1, 2, 1, 0, 2, 2, 1, 1, 2, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 2, 0, 0,
    0, 2, 3, 3, 3, 1, 3, 0, 0, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 3, 1, 3, 1, 1, 0, 0, 2, 2, 2, 2, 1, 2, 2, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 3, 1, 3, 2, 2, 0, 1, 3, 2, 0, 0, 1, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 2, 1, 2, 1, 1, 0, 0, 0, 2, 0, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 1, 2, 2, 2, 0, 2, 0, 1, 2, 2, 1, 1, 1, 1, 2, 1, 2, 2, 1, 1, 2, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 0, 1, 0, 1, 3, 1, 0, 2, 3, 2, 3, 1, 1, 0, 0, 0, 0, 0, 1, 2, 0, 2, 1, 0, 1, 2, 2, 0, 2, 0, 1, 3, 1, 3, 2, 2, 0, 2, 0, 2, 2, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0,
    0, 3, 3, 2, 1, 2, 2, 1, 1, 2, 1, 1, 1, 2, 2, 1, 1, 0, 2, 2, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 2, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 2, 0, 3, 3, 2, 2, 3, 3, 1, 0, 0, 1, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 2, 2, 1, 1, 2, 3, 1, 3, 2, 3, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 0, 0, 2, 2, 0, 0, 1, 0, 0, 1, 3, 0, 0, 1, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 2, 1, 2, 1, 1, 2, 1, 2, 1, 0, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 2, 2, 3, 0, 2, 0, 1, 2, 1, 2, 2, 3, 1, 1, 0, 1, 1, 0, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1,
    0, 2, 2, 2, 1, 1, 2, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 2, 3, 2, 0, 2, 0, 0, 2, 1, 2, 1, 1, 2, 1, 1, 0, 1, 0, 0, 1, 0, 2, 1, 0, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
    0, 0, 0, 0, 0, 3, 0, 0, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 2, 1, 1, 2, 3, 2, 1, 1, 0, 0, 1, 1, 2, 1, 1, 1, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 2, 2, 3, 2, 2, 1, 1, 0, 2, 1, 0, 1, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 2, 1, 1, 0, 1, 0, 0, 2, 1, 1, 3, 1, 1, 2, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0,
    0, 2, 2, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 1, 2, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 1, 0, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 2, 0, 0, 1, 1, 0, 2, 1, 1, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0,
    0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 2, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP037_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 57, 100, 65, 24, 17, 101, 21, 102, 253, 253, 253, 253, 253, 253,
    253, 39, 52, 103, 104, 28, 105, 106, 107, 108, 253, 253, 253, 253, 253, 253,
    253, 253, 73, 109, 74, 68, 59, 110, 62, 111, 253, 253, 253, 253, 253, 253,
    112, 66, 113, 114, 115, 69, 116, 117, 118, 253, 253, 253, 253, 253, 253, 253,
    119, 2, 20, 10, 7, 1, 15, 19, 18, 6, 253, 253, 120, 121, 122, 253,
    253, 49, 45, 12, 11, 8, 3, 13, 30, 4, 123, 124, 125, 253, 126, 253,
    127, 253, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 128, 129, 130, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 251, 70, 131, 132, 42, 48,
    253, 63, 58, 40, 38, 36, 25, 35, 60, 34, 252, 133, 134, 135, 46, 136,
    253, 253, 29, 32, 44, 53, 56, 55, 64, 61, 252, 137, 138, 139, 72, 71,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 140, 141, 142, 67, 251,
];

pub(crate) static CP037_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Portuguese",
    char_to_order_map: &CP037_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 57, 100, 65, 24, 17, 101, 21, 102, 253, 253, 253, 253, 253, 253,
    253, 39, 52, 103, 104, 28, 105, 106, 107, 108, 253, 253, 253, 253, 253, 253,
    253, 253, 73, 109, 74, 68, 59, 110, 62, 111, 253, 253, 253, 253, 253, 253,
    112, 66, 113, 114, 115, 69, 116, 117, 118, 253, 253, 253, 253, 253, 253, 253,
    119, 2, 20, 10, 7, 1, 15, 19, 18, 6, 253, 253, 120, 121, 122, 253,
    253, 49, 45, 12, 11, 8, 3, 13, 30, 4, 123, 124, 125, 253, 126, 253,
    127, 253, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 128, 129, 130, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 251, 70, 131, 132, 42, 48,
    253, 63, 58, 40, 38, 36, 25, 35, 60, 34, 252, 133, 134, 135, 46, 136,
    253, 253, 29, 32, 44, 53, 56, 55, 64, 61, 252, 137, 138, 139, 72, 71,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 140, 141, 142, 67, 251,
];

pub(crate) static CP500_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Portuguese",
    char_to_order_map: &CP500_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 63, 58, 40, 38, 36, 25,
    35, 60, 34, 29, 32, 44, 53, 56, 55, 64, 61, 253, 253, 253, 253, 253,
    253, 2, 20, 10, 7, 1, 15, 19, 18, 6, 49, 45, 12, 11, 8, 3,
    13, 30, 4, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 253, 253, 251,
    62, 100, 39, 57, 101, 65, 102, 21, 52, 103, 104, 105, 106, 107, 108, 109,
    66, 110, 111, 70, 112, 113, 114, 115, 116, 117, 118, 119, 253, 120, 253, 121,
    24, 28, 42, 46, 122, 123, 124, 125, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 68, 73, 74, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 17, 59, 253, 253, 253, 253, 253, 253, 253, 253,
    126, 127, 128, 129, 130, 131, 69, 132, 133, 253, 253, 253, 253, 253, 134, 253,
    72, 135, 136, 137, 48, 71, 138, 139, 140, 67, 141, 142, 143, 144, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "Portuguese",
    char_to_order_map: &CP850_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 63, 58, 40, 38, 36, 25,
    35, 60, 34, 29, 32, 44, 53, 56, 55, 64, 61, 253, 253, 253, 253, 253,
    253, 2, 20, 10, 7, 1, 15, 19, 18, 6, 49, 45, 12, 11, 8, 3,
    13, 30, 4, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 253, 253, 251,
    62, 100, 39, 57, 101, 65, 102, 21, 52, 103, 104, 105, 106, 107, 108, 109,
    66, 110, 111, 70, 112, 113, 114, 115, 116, 117, 118, 119, 253, 120, 253, 121,
    24, 28, 42, 46, 122, 123, 124, 125, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 68, 73, 74, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 17, 59, 253, 253, 253, 253, 253, 253, 253, 253,
    126, 127, 128, 129, 130, 253, 69, 131, 132, 253, 253, 253, 253, 253, 133, 253,
    72, 134, 135, 136, 48, 71, 137, 138, 139, 67, 140, 141, 142, 143, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "Portuguese",
    char_to_order_map: &CP858_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static CP860_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 63, 58, 40, 38, 36, 25,
    35, 60, 34, 29, 32, 44, 53, 56, 55, 64, 61, 253, 253, 253, 253, 253,
    253, 2, 20, 10, 7, 1, 15, 19, 18, 6, 49, 45, 12, 11, 8, 3,
    13, 30, 4, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 253, 253, 251,
    62, 100, 39, 57, 17, 65, 68, 21, 52, 101, 102, 69, 103, 104, 59, 73,
    66, 74, 105, 70, 48, 106, 67, 107, 108, 71, 109, 253, 253, 110, 253, 72,
    24, 28, 42, 46, 111, 112, 113, 114, 253, 115, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 253, 128, 129, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 130, 252, 253, 253,
];

pub(crate) static CP860_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP860",
    language: "Portuguese",
    char_to_order_map: &CP860_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 63, 58, 40, 38, 36, 25,
    35, 60, 34, 29, 32, 44, 53, 56, 55, 64, 61, 253, 253, 253, 253, 253,
    253, 2, 20, 10, 7, 1, 15, 19, 18, 6, 49, 45, 12, 11, 8, 3,
    13, 30, 4, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 100, 253, 101, 253, 102, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 103, 104, 253, 253, 105, 252, 106, 253, 107, 108, 109, 253,
    74, 68, 73, 59, 110, 111, 112, 62, 113, 66, 114, 115, 116, 69, 117, 118,
    119, 120, 121, 72, 122, 71, 123, 253, 124, 125, 67, 126, 127, 128, 129, 130,
    65, 24, 57, 17, 131, 132, 133, 21, 134, 39, 52, 135, 136, 28, 137, 138,
    139, 140, 141, 42, 70, 48, 142, 253, 143, 144, 46, 145, 146, 147, 148, 149,
];

pub(crate) static ISO_8859_15_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "Portuguese",
    char_to_order_map: &ISO_8859_15_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 63, 58, 40, 38, 36, 25,
    35, 60, 34, 29, 32, 44, 53, 56, 55, 64, 61, 253, 253, 253, 253, 253,
    253, 2, 20, 10, 7, 1, 15, 19, 18, 6, 49, 45, 12, 11, 8, 3,
    13, 30, 4, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    74, 68, 73, 59, 103, 104, 105, 62, 106, 66, 107, 108, 109, 69, 110, 111,
    112, 113, 114, 72, 115, 71, 116, 253, 117, 118, 67, 119, 120, 121, 122, 123,
    65, 24, 57, 17, 124, 125, 126, 21, 127, 39, 52, 128, 129, 28, 130, 131,
    132, 133, 134, 42, 70, 48, 135, 253, 136, 137, 46, 138, 139, 140, 141, 142,
];

pub(crate) static ISO_8859_1_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "Portuguese",
    char_to_order_map: &ISO_8859_1_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 63, 58, 40, 38, 36, 25,
    35, 60, 34, 29, 32, 44, 53, 56, 55, 64, 61, 253, 253, 253, 253, 253,
    253, 2, 20, 10, 7, 1, 15, 19, 18, 6, 49, 45, 12, 11, 8, 3,
    13, 30, 4, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 253, 253, 251,
    100, 101, 62, 66, 102, 103, 104, 24, 65, 57, 105, 17, 106, 21, 39, 107,
    52, 108, 28, 109, 110, 111, 112, 42, 113, 70, 114, 48, 46, 115, 116, 117,
    253, 253, 253, 253, 253, 253, 253, 118, 253, 253, 253, 253, 253, 253, 119, 120,
    253, 253, 253, 253, 253, 121, 253, 253, 253, 122, 253, 123, 124, 125, 126, 127,
    253, 253, 253, 253, 128, 253, 253, 253, 253, 253, 253, 74, 59, 71, 129, 130,
    253, 253, 253, 253, 253, 253, 253, 253, 131, 132, 253, 253, 253, 253, 133, 134,
    253, 253, 253, 253, 253, 73, 135, 68, 136, 137, 69, 138, 139, 140, 72, 141,
    251, 142, 67, 143, 144, 145, 146, 253, 253, 253, 253, 253, 253, 253, 253, 147,
];

pub(crate) static MACROMAN_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "Portuguese",
    char_to_order_map: &MACROMAN_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_PORTUGUESE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 22, 43, 33, 37, 26, 41, 50, 51, 27, 63, 58, 40, 38, 36, 25,
    35, 60, 34, 29, 32, 44, 53, 56, 55, 64, 61, 253, 253, 253, 253, 253,
    253, 2, 20, 10, 7, 1, 15, 19, 18, 6, 49, 45, 12, 11, 8, 3,
    13, 30, 4, 5, 9, 14, 16, 54, 23, 47, 31, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 102, 253, 103, 255, 104, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 106, 255, 107, 108,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 109, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 110, 253, 253, 253, 252, 111, 253, 252, 252, 252, 253,
    74, 68, 73, 59, 112, 113, 114, 62, 115, 66, 116, 117, 118, 69, 119, 120,
    121, 122, 123, 72, 124, 71, 125, 253, 126, 127, 67, 128, 129, 130, 131, 132,
    65, 24, 57, 17, 133, 134, 135, 21, 136, 39, 52, 137, 138, 28, 139, 140,
    141, 142, 143, 42, 70, 48, 144, 253, 145, 146, 46, 147, 148, 149, 150, 151,
];

pub(crate) static WINDOWS_1252_PORTUGUESE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "Portuguese",
    char_to_order_map: &WINDOWS_1252_PORTUGUESE_CHAR_TO_ORDER,
    language_model: &PORTUGUESE_LANG_MODEL,
    typical_positive_ratio: 0.966843,
    keep_ascii_letters: true,
    reversed: false,
};
