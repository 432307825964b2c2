// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static SERBIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 0, 0, 3, 0, 3, 0, 0, 0, 0, 3, 0, 0, 0, 3, 0, 1, 3, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 3, 0, 3, 0, 0, 2, 0, 3, 0, 0, 0, 3, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 1, 2, 0, 3, 0, 0, 1, 0, 3, 0, 0, 0, 3, 1, 0, 2, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 1, 3, 0, 3, 0, 0, 1, 0, 3, 0, 0, 0, 3, 0, 0, 3, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 1, 3, 3, 3, 3, 3, 2, 2, 2, 1, 2, 2, 2, 3, 2, 1, 3, 3, 3, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 0, 1, 3, 0, 2, 0, 0, 0, 1, 3, 0, 0, 0, 2, 0, 1, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 2, 2, 1, 2, 1, 1, 1, 1, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 3, 0, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 3, 3, 2, 0, 3, 1, 2, 1, 0, 1, 3, 0, 0, 1, 2, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 2, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 0, 3, 1, 2, 3, 2, 2, 1, 3, 1, 1, 2, 1, 0, 3, 3, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 1, 0, 0, 0, 3, 0, 3, 0, 0, 0, 0, 2, 2, 0, 0, 3, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 3, 2, 3, 2, 2, 3, 3, 2, 2, 2, 3, 3, 2, 3, 1, 0, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 1, 2, 0, 0, 2, 1, 3, 0, 1, 3, 0, 1, 3, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 0, 2, 3, 3, 2, 1, 0, 1, 2, 1, 3, 1, 2, 2, 1, 1, 2, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 2, 3, 2, 3, 1, 3, 1, 1, 2, 1, 2, 3, 1, 2, 1, 1, 1, 2, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 1, 1, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 0, 0, 1, 3, 3, 1, 3, 3, 2, 0, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3, 2, 2, 2, 2, 0, 2, 2, 2, 2, 2, 1, 2, 2, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 0, 2, 1, 3, 1, 0, 2, 0, 3, 2, 3, 0, 0, 1, 1, 1, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 2, 2, 3, 2, 2, 2, 3, 1, 2, 3, 1, 1, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 1, 3, 1, 3, 2, 0, 2, 2, 1, 0, 0, 2, 0, 1, 0, 3, 2, 2, 1, 0, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 0, 2, 1, 3, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 0, 0, 0, 3, 3, 1, 0, 2, 1, 2, 0, 3, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 1, 3, 1, 1, 1, 3, 0, 1, 2, 0, 1, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 0, 0, 2, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 1, 1, 1, 1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 3, 0, 0, 3, 0, 2, 2, 2, 2, 0, 2, 0, 2, 0, 0, 2, 0, 2, 0, 2, 1, 0, 0, 2, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 1, 3, 3, 2, 2, 3, 2, 3, 2, 2, 2, 2, 2, 3, 2, 2, 2, 0, 0, 0, 1, 2, 1, 3, 1, 1, 0, 1, 3, 3, 3, 1, 3, 3, 1, 2, 3, 2, 0, 1, 2, 1, 2, 3, 2, 2, 1, 1, 0, 2, 3, 1, 0, 1, 0, 2, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 1, 0, 1, 2, 0, 0, 2, 1, 2, 0, 2, 0, 0, 0, 0, 1, 0, 1, 2, 2, 1, 0, 3, 0, 3, 2, 2, 2, 0, 1, 3, 2, 0, 1, 2, 0, 2, 0, 2, 1, 0, 1, 3, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 1, 1, 0, 0, 3, 2, 0, 0, 0, 2, 0, 1, 1, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 3, 2, 2, 3, 3, 0, 2, 1, 2, 3, 0, 3, 2, 2, 1, 1, 0, 0, 1, 0, 3, 1, 2, 0, 1, 0, 2, 3, 3, 2, 0, 2, 3, 1, 1, 3, 2, 0, 0, 3, 2, 2, 3, 3, 2, 2, 2, 1, 3, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 0, 0, 1, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 0, 2, 2, 2, 3, 2, 1, 3, 3, 3, 2, 1, 2, 2, 3, 2, 2, 0, 2, 1, 0, 3, 0, 3, 0, 1, 0, 1, 3, 2, 3, 1, 3, 3, 0, 2, 2, 3, 0, 0, 2, 2, 2, 2, 3, 2, 2, 1, 1, 2, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 2, 3, 0, 2, 3, 0, 3, 3, 2, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 2, 3, 2, 0, 3, 0, 2, 2, 3, 2, 0, 3, 2, 2, 1, 2, 2, 0, 2, 2, 2, 2, 0, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 3, 2, 2, 0, 3, 0, 0, 2, 0, 2, 0, 2, 0, 1, 0, 1, 0, 0, 2, 1, 3, 1, 0, 1, 0, 3, 3, 0, 1, 0, 2, 2, 3, 0, 1, 1, 0, 3, 2, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 2, 0, 0, 0, 3, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 3, 2, 0, 3, 0, 2, 2, 1, 1, 0, 2, 3, 2, 0, 3, 1, 0, 1, 2, 2, 2, 0, 0, 1, 2, 0, 1, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 2, 0, 2, 0, 0, 3, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 0, 3, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 2, 3, 2, 0, 3, 0, 3, 2, 2, 1, 0, 2, 2, 3, 0, 0, 2, 0, 2, 1, 1, 2, 0, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 3, 1, 0, 3, 0, 3, 2, 1, 2, 0, 1, 0, 3, 0, 0, 2, 0, 2, 2, 3, 2, 1, 2, 2, 2, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 2, 2, 2, 2, 2, 1, 2, 1, 2, 2, 1, 0, 2, 1, 2, 1, 0, 0, 0, 0, 3, 1, 2, 0, 1, 0, 2, 2, 3, 3, 0, 2, 2, 0, 0, 1, 2, 0, 1, 1, 2, 3, 2, 0, 2, 2, 2, 1, 2, 2, 0, 2, 2, 0, 2, 2, 0, 0, 0,
    0, 3, 2, 3, 3, 0, 3, 3, 2, 0, 3, 2, 1, 1, 1, 1, 0, 2, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 3, 0, 0, 0, 3, 0, 0, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 3, 1, 0, 2, 0, 2, 2, 0, 1, 0, 1, 3, 2, 0, 0, 2, 0, 2, 1, 1, 3, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 1, 1, 0, 0, 2, 1, 1, 1, 0, 1, 0, 1, 2, 0, 0, 0, 0, 1, 0, 1, 3, 2, 0, 2, 0, 2, 2, 0, 1, 0, 1, 1, 3, 0, 2, 1, 0, 1, 0, 1, 2, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 2, 2, 2, 2, 2, 3, 0, 2, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 2, 0, 0, 2, 1, 2, 0, 2, 0, 0, 2, 2, 0, 0, 3, 2, 0, 0, 2, 2, 0, 0, 1, 1, 2, 1, 0, 1, 2, 1, 0, 2, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 3, 0, 0, 0, 2, 0, 0, 1, 0, 1, 1, 2, 0, 1, 0, 0, 0, 0, 0, 2, 3, 1, 0, 2, 0, 2, 1, 1, 2, 0, 1, 3, 3, 0, 1, 2, 0, 2, 1, 1, 2, 1, 0, 1, 1, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 2, 3, 2, 2, 0, 2, 2, 1, 2, 1, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0, 2, 0, 2, 1, 1, 2, 0, 2, 3, 2, 0, 1, 2, 0, 2, 1, 1, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 1, 0, 0, 0, 3, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 1, 0, 3, 0, 3, 2, 0, 2, 0, 2, 1, 2, 0, 1, 1, 0, 1, 0, 1, 2, 1, 0, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 2, 2, 1, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 3, 3, 0, 0, 3, 0, 2, 0, 0, 2, 1, 0, 3, 1, 0, 1, 1, 0, 1, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 3, 2, 0, 1, 0, 1, 2, 0, 1, 0, 2, 1, 2, 0, 2, 1, 0, 2, 2, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 3, 0, 2, 2, 2, 2, 0, 1, 2, 2, 0, 0, 1, 0, 2, 1, 1, 2, 0, 1, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 2, 0, 2, 1, 0, 2, 0, 2, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 0, 1, 2, 0, 2, 2, 0, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 2, 0, 1, 0, 2, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0,
    0, 3, 2, 2, 2, 0, 2, 0, 0, 0, 2, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 2, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 1, 0, 1, 0, 0, 0, 2, 0, 0, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 2, 0, 0, 0, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP855_SERBIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    42, 59, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 15, 48,
    24, 56, 21, 54, 30, 60, 164, 165, 166, 167, 55, 58, 168, 169, 170, 171,
    1, 26, 18, 40, 23, 49, 11, 34, 2, 38, 39, 50, 19, 45, 253, 253,
    253, 253, 253, 253, 253, 35, 52, 3, 29, 253, 253, 253, 253, 172, 173, 253,
    253, 253, 253, 253, 253, 253, 9, 33, 253, 253, 253, 253, 253, 253, 253, 253,
    17, 46, 14, 41, 5, 25, 4, 31, 12, 253, 253, 253, 253, 27, 174, 253,
    175, 6, 37, 8, 32, 7, 36, 10, 43, 28, 57, 13, 44, 176, 177, 253,
    251, 178, 179, 16, 47, 20, 51, 180, 181, 182, 183, 22, 53, 253, 253, 253,
];

pub(crate) static CP855_SERBIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP855",
    language: "Serbian",
    char_to_order_map: &CP855_SERBIAN_CHAR_TO_ORDER,
    language_model: &SERBIAN_LANG_MODEL,
    typical_positive_ratio: 0.976689,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_5_SERBIAN_CHAR_TO_ORDER: [u8; 256] = [
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
    253, 152, 59, 153, 154, 155, 156, 157, 48, 56, 54, 60, 158, 251, 159, 58,
    26, 40, 44, 45, 34, 38, 57, 47, 29, 160, 33, 46, 41, 25, 31, 27,
    37, 32, 36, 43, 50, 52, 49, 53, 51, 161, 162, 163, 164, 165, 166, 167,
    1, 18, 13, 19, 11, 2, 28, 16, 3, 168, 9, 17, 14, 5, 4, 12,
    6, 8, 7, 10, 39, 35, 23, 22, 20, 169, 170, 171, 172, 173, 174, 175,
    253, 176, 42, 177, 178, 179, 180, 181, 15, 24, 21, 30, 182, 253, 183, 55,
];

pub(crate) static ISO_8859_5_SERBIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-5",
    language: "Serbian",
    char_to_order_map: &ISO_8859_5_SERBIAN_CHAR_TO_ORDER,
    language_model: &SERBIAN_LANG_MODEL,
    typical_positive_ratio: 0.976689,
    keep_ascii_letters: false,
    reversed: false,
};

static MACCYRILLIC_SERBIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    26, 40, 44, 45, 34, 38, 57, 47, 29, 152, 33, 46, 41, 25, 31, 27,
    37, 32, 36, 43, 50, 52, 49, 53, 51, 153, 154, 155, 156, 157, 158, 159,
    253, 253, 160, 253, 253, 253, 253, 161, 253, 253, 253, 59, 42, 253, 162, 163,
    253, 253, 253, 253, 164, 165, 166, 48, 167, 168, 169, 170, 56, 24, 54, 21,
    15, 171, 253, 253, 172, 253, 253, 253, 253, 253, 253, 60, 30, 173, 174, 175,
    253, 253, 253, 253, 253, 253, 253, 253, 176, 177, 58, 55, 253, 178, 179, 180,
    1, 18, 13, 19, 11, 2, 28, 16, 3, 181, 9, 17, 14, 5, 4, 12,
    6, 8, 7, 10, 39, 35, 23, 22, 20, 182, 183, 184, 185, 186, 187, 253,
];

pub(crate) static MACCYRILLIC_SERBIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacCyrillic",
    language: "Serbian",
    char_to_order_map: &MACCYRILLIC_SERBIAN_CHAR_TO_ORDER,
    language_model: &SERBIAN_LANG_MODEL,
    typical_positive_ratio: 0.976689,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1251_SERBIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
    115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 253, 253, 253, 253, 253,
    253, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 253, 253, 253, 253, 251,
    59, 152, 253, 153, 253, 253, 253, 253, 253, 253, 56, 253, 54, 154, 60, 58,
    42, 253, 253, 253, 253, 253, 253, 253, 255, 253, 24, 253, 21, 155, 30, 55,
    253, 156, 157, 48, 253, 158, 253, 253, 159, 253, 160, 253, 253, 251, 253, 161,
    253, 253, 162, 163, 164, 165, 253, 253, 166, 253, 167, 253, 15, 168, 169, 170,
    26, 40, 44, 45, 34, 38, 57, 47, 29, 171, 33, 46, 41, 25, 31, 27,
    37, 32, 36, 43, 50, 52, 49, 53, 51, 172, 173, 174, 175, 176, 177, 178,
    1, 18, 13, 19, 11, 2, 28, 16, 3, 179, 9, 17, 14, 5, 4, 12,
    6, 8, 7, 10, 39, 35, 23, 22, 20, 180, 181, 182, 183, 184, 185, 186,
];

pub(crate) static WINDOWS_1251_SERBIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1251",
    language: "Serbian",
    char_to_order_map: &WINDOWS_1251_SERBIAN_CHAR_TO_ORDER,
    language_model: &SERBIAN_LANG_MODEL,
    typical_positive_ratio: 0.976689,
    keep_ascii_letters: false,
    reversed: false,
};
