// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static ROMANIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 3, 1, 1, 1, 0, 1, 2, 1, 1, 1, 2, 1, 0, 1, 0, 1, 1, 3, 0, 2, 1, 2, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 0, 3, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 2, 0, 2, 0, 2, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 1, 3, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 3, 1, 3, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 2, 1, 1, 0, 0, 1, 1, 0, 3, 1, 0, 2, 1, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 1, 1, 0, 0, 0, 3, 1, 2, 2, 1, 1, 0, 1, 1, 1, 0, 1, 2, 1, 1, 1, 1, 0, 1, 3, 0, 1, 2, 0, 3, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 3, 2, 3, 1, 0, 2, 2, 1, 0, 0, 1, 1, 1, 0, 2, 1, 0, 0, 0, 2, 1, 1, 1, 2, 1, 3, 0, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 0, 0, 0, 3, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 2, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 1, 1, 1, 0, 2, 3, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 2, 1, 0, 0, 0, 2, 1, 0, 0, 3, 1, 3, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 1, 2, 1, 0, 1, 3, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 2, 0, 1, 2, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 2, 3, 3, 3, 2, 2, 3, 2, 1, 2, 1, 3, 3, 1, 0, 3, 2, 1, 0, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 3, 0, 0, 3, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 2, 3, 1, 0, 1, 3, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 3, 0, 2, 1, 1, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 2, 2, 2, 3, 3, 2, 3, 2, 1, 3, 2, 2, 0, 0, 0, 1, 0, 1, 2, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 2, 2, 0, 2, 0, 2, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 3, 2, 3, 3, 1, 1, 2, 1, 1, 3, 1, 0, 2, 1, 2, 1, 3, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 3, 2, 0, 0, 2, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 2, 0, 3, 3, 2, 3, 3, 2, 2, 0, 2, 2, 1, 2, 0, 2, 1, 0, 3, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 2, 3, 3, 3, 2, 1, 3, 2, 3, 3, 3, 1, 0, 3, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 3, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 2, 3, 2, 3, 3, 2, 3, 1, 3, 2, 1, 0, 0, 0, 0, 1, 1, 0, 2, 1, 1, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 1, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 2, 2, 3, 3, 1, 2, 2, 1, 0, 0, 2, 3, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 3, 3, 3, 2, 3, 2, 2, 3, 1, 2, 1, 2, 0, 3, 1, 2, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 1, 1, 2, 2, 1, 0, 3, 1, 2, 3, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 0, 1, 2, 0, 0, 0, 1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 3, 2, 3, 0, 0, 2, 2, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 0, 1, 3, 2, 2, 0, 3, 3, 0, 3, 2, 1, 1, 2, 1, 0, 0, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 2, 2, 2, 2, 1, 3, 1, 2, 2, 2, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 1, 1, 3, 0, 0, 2, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 0, 3, 1, 2, 3, 3, 0, 3, 1, 1, 2, 0, 0, 2, 0, 0, 0, 2, 0, 2, 0, 3, 3, 3, 2, 3, 3, 2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 0, 2, 1, 2, 2, 0, 2, 2, 1, 2, 0, 0, 2, 1, 1, 0, 2, 0, 1, 0, 0,
    0, 3, 3, 3, 1, 3, 1, 3, 1, 1, 3, 1, 1, 3, 3, 2, 2, 1, 2, 1, 0, 0, 2, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 3, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 1, 3, 2, 3, 3, 2, 3, 3, 0, 3, 3, 0, 2, 3, 1, 2, 3, 1, 2, 2, 0, 0, 3, 1, 2, 2, 0, 3, 3, 3, 3, 2, 2, 2, 3, 2, 1, 1, 3, 0, 2, 2, 1, 2, 0, 0, 1, 0, 1, 1, 1, 0, 1, 2, 2, 2, 1, 0, 1, 0, 0,
    0, 2, 0, 2, 2, 2, 3, 2, 2, 1, 2, 2, 3, 0, 0, 3, 1, 2, 1, 0, 0, 0, 0, 0, 0, 3, 0, 2, 2, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 0, 1, 2, 0, 2, 0, 0, 2, 1, 0, 0, 3, 1, 0, 2, 0, 1, 0, 0, 1, 0, 0,
    0, 1, 1, 1, 3, 2, 3, 2, 3, 3, 2, 1, 2, 0, 0, 2, 2, 1, 1, 2, 0, 2, 0, 0, 0, 3, 3, 2, 2, 2, 3, 2, 3, 3, 2, 2, 2, 3, 1, 2, 2, 2, 0, 0, 2, 0, 1, 0, 0, 3, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 0, 1, 3, 0, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 2, 3, 3, 1, 3, 2, 1, 1, 3, 2, 1, 3, 2, 2, 0, 0, 0, 2, 0, 2, 2, 0, 1, 0, 1, 1, 0, 0, 1, 2, 1, 2, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 0, 2, 2, 1, 2, 3, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 2, 0, 3, 3, 3, 1, 3, 2, 3, 3, 2, 2, 3, 2, 3, 3, 1, 0, 0, 1, 0, 0, 3, 0, 1, 2, 0, 2, 0, 0, 2, 2, 0, 0, 2, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 2, 0, 3, 0, 2, 1, 3, 1, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 3, 1, 2, 0, 3, 2, 2, 1, 2, 2, 2, 2, 2, 1, 2, 2, 3, 2, 1, 2, 0, 1, 0, 1, 1, 0, 1, 3, 1, 2, 0, 0, 2, 0, 2, 2, 0, 0, 0, 1, 0,
    0, 3, 2, 2, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 3, 1, 3, 3, 3, 2, 3, 2, 2, 1, 1, 3, 2, 2, 3, 2, 1, 1, 0, 2, 0, 2, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0,
    0, 3, 2, 3, 3, 0, 0, 2, 1, 3, 0, 3, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 2, 0, 3, 3, 3, 2, 2, 3, 3, 2, 2, 2, 3, 2, 3, 1, 1, 0, 0, 2, 1, 0, 1, 0, 1, 2, 1, 2, 0, 0, 1, 0, 0, 3, 1, 1, 0, 0, 0,
    0, 3, 3, 3, 2, 0, 0, 2, 0, 1, 0, 3, 1, 1, 1, 1, 1, 0, 1, 2, 0, 0, 1, 1, 0, 2, 0, 2, 3, 3, 2, 2, 2, 2, 2, 1, 1, 2, 1, 2, 2, 2, 0, 1, 2, 0, 2, 1, 1, 2, 1, 3, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 1, 1, 3, 2, 0, 1, 3, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 3, 3, 3, 2, 2, 1, 1, 2, 2, 2, 2, 1, 2, 1, 2, 0, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 1, 0, 0, 3, 1, 0, 0, 3, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 3, 0, 2, 3, 3, 1, 3, 2, 2, 2, 2, 1, 3, 2, 3, 2, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 2, 2, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 2, 1, 2, 3, 3, 1, 2, 2, 2, 0, 1, 1, 0, 2, 0, 1, 2, 0, 0, 0, 2, 0, 0, 2, 0, 2, 2, 2, 3, 3, 1, 3, 2, 0, 3, 3, 1, 0, 2, 1, 0, 0, 1, 0, 2, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 2, 1, 0, 0, 2, 2, 2, 1, 0, 3, 0, 1, 2, 1, 2, 0, 0, 0, 0, 0, 0, 2, 0, 2, 1, 0, 2, 2, 3, 3, 3, 3, 3, 2, 2, 1, 2, 2, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 3, 2, 3, 0, 0, 2, 0, 2, 0, 3, 0, 0, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 2, 3, 1, 1, 2, 1, 2, 2, 2, 1, 2, 2, 2, 2, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 2, 0, 0, 3, 1, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 2, 3, 2, 0, 2, 2, 1, 0, 1, 2, 2, 2, 2, 2, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 3, 3, 3, 0, 0, 2, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 0, 0, 0, 3, 1, 2, 0, 3, 2, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 2, 2, 2, 1, 1, 0, 2, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 2, 0, 2, 3, 2, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 2, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 2, 1, 3, 1, 2, 2, 1, 1, 2, 1, 1, 1, 1, 1, 2, 2, 1, 0, 0, 0, 2, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 2, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 0, 0, 1, 0, 1, 0, 2, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 2, 2, 3, 1, 1, 1, 1, 1, 1, 2, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 2, 1, 2, 1, 2, 2, 1, 2, 2, 1, 1, 1, 3, 0, 3, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 0, 2, 0, 2, 2, 1, 2, 2, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 2, 1, 1, 2, 1, 1, 3, 1, 2, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 2, 2, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 2, 2, 1, 2, 1, 1, 2, 2, 1, 0, 1, 2, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 3, 1, 2, 1, 0, 1, 1, 1, 1, 1, 1, 0, 2, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 1, 0, 0, 2, 0, 1, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 1, 1, 0, 1, 2, 0, 2, 1, 1, 0, 1, 1, 1, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 2, 0, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0,
    0, 2, 1, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 2, 0, 0, 1, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 2, 1, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 0, 2, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 0, 0, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP852_ROMANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 41, 32, 35, 29, 40, 44, 50, 28, 57, 52, 37, 36, 30, 39,
    34, 61, 33, 25, 31, 38, 46, 51, 49, 59, 56, 253, 253, 253, 253, 253,
    253, 3, 18, 10, 12, 1, 16, 17, 23, 2, 43, 45, 9, 15, 6, 11,
    13, 60, 4, 8, 5, 7, 19, 48, 26, 47, 22, 253, 253, 253, 253, 251,
    100, 101, 102, 42, 103, 104, 105, 106, 107, 108, 109, 110, 24, 111, 112, 113,
    114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 253, 128,
    129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 253, 139, 140, 141, 253, 253,
    253, 253, 253, 253, 253, 142, 62, 143, 144, 253, 253, 253, 253, 145, 146, 253,
    253, 253, 253, 253, 253, 253, 55, 14, 253, 253, 253, 253, 253, 253, 253, 253,
    147, 148, 149, 150, 151, 152, 153, 54, 154, 253, 253, 253, 253, 155, 156, 253,
    157, 158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 253,
    251, 253, 253, 172, 253, 253, 253, 253, 253, 253, 253, 173, 174, 175, 253, 253,
];

pub(crate) static CP852_ROMANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP852",
    language: "Romanian",
    char_to_order_map: &CP852_ROMANIAN_CHAR_TO_ORDER,
    language_model: &ROMANIAN_LANG_MODEL,
    typical_positive_ratio: 0.973829,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_16_ROMANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 41, 32, 35, 29, 40, 44, 50, 28, 57, 52, 37, 36, 30, 39,
    34, 61, 33, 25, 31, 38, 46, 51, 49, 59, 56, 253, 253, 253, 253, 253,
    253, 3, 18, 10, 12, 1, 16, 17, 23, 2, 43, 45, 9, 15, 6, 11,
    13, 60, 4, 8, 5, 7, 19, 48, 26, 47, 22, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 100, 101, 102, 253, 253, 103, 253, 104, 253, 53, 253, 105, 251, 106, 107,
    253, 253, 108, 109, 110, 253, 253, 253, 111, 112, 21, 253, 113, 114, 115, 116,
    117, 118, 62, 55, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 54, 129,
    130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 58, 144,
    145, 146, 42, 14, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 24, 157,
    158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 20, 172,
];

pub(crate) static ISO_8859_16_ROMANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-16",
    language: "Romanian",
    char_to_order_map: &ISO_8859_16_ROMANIAN_CHAR_TO_ORDER,
    language_model: &ROMANIAN_LANG_MODEL,
    typical_positive_ratio: 0.974057,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_2_ROMANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 41, 32, 35, 29, 40, 44, 50, 28, 57, 52, 37, 36, 30, 39,
    34, 61, 33, 25, 31, 38, 46, 51, 49, 59, 56, 253, 253, 253, 253, 253,
    253, 3, 18, 10, 12, 1, 16, 17, 23, 2, 43, 45, 9, 15, 6, 11,
    13, 60, 4, 8, 5, 7, 19, 48, 26, 47, 22, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 100, 253, 101, 253, 102, 103, 253, 253, 104, 105, 106, 107, 251, 108, 109,
    253, 110, 253, 111, 253, 112, 113, 114, 253, 115, 116, 117, 118, 253, 119, 120,
    121, 122, 62, 55, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 54, 133,
    134, 135, 136, 137, 138, 139, 140, 253, 141, 142, 143, 144, 145, 146, 147, 148,
    149, 150, 42, 14, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160, 24, 161,
    162, 163, 164, 165, 166, 167, 168, 253, 169, 170, 171, 172, 173, 174, 175, 253,
];

pub(crate) static ISO_8859_2_ROMANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-2",
    language: "Romanian",
    char_to_order_map: &ISO_8859_2_ROMANIAN_CHAR_TO_ORDER,
    language_model: &ROMANIAN_LANG_MODEL,
    typical_positive_ratio: 0.973829,
    keep_ascii_letters: true,
    reversed: false,
};

static MACLATIN2_ROMANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 41, 32, 35, 29, 40, 44, 50, 28, 57, 52, 37, 36, 30, 39,
    34, 61, 33, 25, 31, 38, 46, 51, 49, 59, 56, 253, 253, 253, 253, 253,
    253, 3, 18, 10, 12, 1, 16, 17, 23, 2, 43, 45, 9, 15, 6, 11,
    13, 60, 4, 8, 5, 7, 19, 48, 26, 47, 22, 253, 253, 253, 253, 251,
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
    116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131,
    253, 253, 132, 253, 253, 253, 253, 133, 253, 253, 253, 134, 253, 253, 135, 136,
    137, 138, 253, 253, 139, 140, 253, 253, 141, 142, 143, 144, 145, 146, 147, 148,
    149, 150, 253, 253, 151, 152, 253, 253, 253, 253, 253, 153, 154, 155, 156, 157,
    253, 253, 253, 253, 253, 253, 253, 253, 158, 159, 160, 161, 253, 253, 162, 163,
    164, 165, 253, 253, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 176, 177,
    178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, 192, 193,
];

pub(crate) static MACLATIN2_ROMANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacLatin2",
    language: "Romanian",
    char_to_order_map: &MACLATIN2_ROMANIAN_CHAR_TO_ORDER,
    language_model: &ROMANIAN_LANG_MODEL,
    typical_positive_ratio: 0.974850,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1250_ROMANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 41, 32, 35, 29, 40, 44, 50, 28, 57, 52, 37, 36, 30, 39,
    34, 61, 33, 25, 31, 38, 46, 51, 49, 59, 56, 253, 253, 253, 253, 253,
    253, 3, 18, 10, 12, 1, 16, 17, 23, 2, 43, 45, 9, 15, 6, 11,
    13, 60, 4, 8, 5, 7, 19, 48, 26, 47, 22, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 100, 253, 101, 102, 103, 104,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 105, 253, 106, 107, 108, 109,
    253, 110, 253, 111, 253, 112, 253, 253, 253, 253, 113, 253, 253, 251, 253, 114,
    253, 253, 253, 115, 253, 116, 253, 253, 253, 117, 118, 253, 119, 253, 120, 121,
    122, 123, 62, 55, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 54, 134,
    135, 136, 137, 138, 139, 140, 141, 253, 142, 143, 144, 145, 146, 147, 148, 149,
    150, 151, 42, 14, 152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 24, 162,
    163, 164, 165, 166, 167, 168, 169, 253, 170, 171, 172, 173, 174, 175, 176, 253,
];

pub(crate) static WINDOWS_1250_ROMANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1250",
    language: "Romanian",
    char_to_order_map: &WINDOWS_1250_ROMANIAN_CHAR_TO_ORDER,
    language_model: &ROMANIAN_LANG_MODEL,
    typical_positive_ratio: 0.973829,
    keep_ascii_letters: true,
    reversed: false,
};
