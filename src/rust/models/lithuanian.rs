// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static LITHUANIAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 3, 3, 1, 0, 1, 3, 3, 1, 0, 3, 0, 0, 1, 0, 0, 0, 0, 3, 0, 0, 3, 1, 0, 3, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 1, 0, 1, 3, 3, 0, 1, 2, 0, 1, 3, 1, 1, 1, 0, 3, 0, 0, 1, 2, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 0, 3, 3, 1, 1, 3, 1, 0, 2, 3, 0, 1, 0, 2, 1, 3, 0, 0, 0, 0, 2, 0, 1, 3, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 2, 2, 3, 3, 0, 2, 3, 0, 1, 2, 2, 2, 0, 1, 3, 0, 3, 1, 1, 0, 0, 1, 0, 2, 3, 3, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 0, 3, 3, 0, 1, 0, 3, 3, 1, 0, 3, 3, 1, 0, 1, 2, 0, 1, 3, 1, 1, 2, 0, 1, 3, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 1, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 0, 3, 2, 1, 0, 0, 3, 3, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 2, 0, 1, 2, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 0, 1, 2, 3, 0, 0, 2, 3, 1, 3, 1, 1, 0, 1, 2, 0, 1, 2, 3, 0, 2, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 2, 2, 2, 3, 3, 3, 2, 3, 3, 2, 2, 3, 0, 1, 3, 3, 1, 0, 1, 3, 0, 3, 1, 0, 0, 0, 3, 0, 0, 2, 2, 1, 2, 1, 0, 0, 1, 2, 0, 0, 0, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 1, 3, 3, 2, 0, 3, 3, 2, 3, 3, 2, 2, 0, 3, 1, 0, 0, 2, 0, 3, 1, 1, 0, 1, 2, 0, 0, 2, 2, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 0, 0, 3, 3, 0, 0, 0, 3, 2, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 2, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 1, 3, 1, 1, 2, 2, 1, 1, 2, 3, 0, 3, 1, 1, 1, 0, 1, 0, 0, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 0, 2, 2, 3, 2, 2, 3, 1, 1, 1, 0, 3, 3, 3, 2, 3, 0, 0, 2, 0, 0, 0, 2, 0, 0, 3, 0, 0, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 2, 3, 3, 1, 2, 3, 3, 1, 1, 3, 2, 1, 2, 3, 0, 0, 1, 1, 2, 0, 1, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 0, 3, 3, 3, 1, 2, 3, 2, 2, 2, 2, 3, 2, 2, 3, 3, 1, 1, 3, 0, 1, 1, 0, 0, 0, 3, 2, 0, 2, 1, 0, 0, 1, 0, 0, 0, 2, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 3, 3, 2, 1, 0, 3, 2, 0, 0, 1, 0, 1, 1, 3, 3, 1, 0, 3, 0, 1, 0, 1, 0, 0, 0, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 2, 2, 2, 2, 2, 1, 3, 3, 1, 0, 2, 0, 0, 1, 1, 0, 0, 1, 2, 0, 3, 0, 0, 0, 0, 1, 0, 0, 2, 3, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 3, 3, 0, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 3, 3, 1, 1, 3, 3, 3, 1, 2, 3, 3, 3, 3, 3, 3, 1, 0, 3, 2, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 2, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 3, 3, 3, 0, 0, 3, 3, 1, 1, 2, 2, 1, 3, 2, 3, 1, 1, 3, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 1, 1, 1, 0, 1, 0, 0, 2, 3, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 0, 0, 3, 3, 2, 0, 3, 3, 2, 2, 1, 2, 3, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 3, 0, 1, 3, 3, 2, 3, 3, 2, 3, 2, 2, 2, 2, 0, 0, 2, 1, 0, 0, 2, 2, 2, 3, 2, 0, 0, 2, 0, 2, 3, 3, 3, 2, 2, 2, 1, 0, 2, 2, 1, 3, 1, 1, 1, 2, 0, 2, 0, 2, 1, 0, 0, 0, 2, 1, 0, 1, 0, 0,
    0, 3, 3, 1, 0, 3, 3, 3, 1, 1, 2, 3, 0, 0, 0, 2, 0, 2, 2, 0, 0, 0, 0, 3, 2, 1, 0, 2, 3, 0, 0, 2, 0, 1, 2, 2, 2, 0, 2, 1, 2, 1, 1, 0, 2, 0, 2, 1, 2, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 1, 0, 3, 2, 0, 1, 2, 0, 2, 0, 2, 1, 1, 0, 1, 1, 0, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 2, 0, 3, 2, 2, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 2, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 3, 3, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 3, 3, 3, 2, 0, 2, 3, 3, 1, 3, 0, 2, 0, 0, 1, 0, 0, 0, 1, 1, 2, 0, 2, 2, 1, 0, 0, 2, 1, 2, 1, 1, 2, 0, 1, 2, 1, 0, 2, 0, 2, 2, 2, 1, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0,
    0, 3, 3, 1, 1, 3, 3, 0, 0, 1, 3, 0, 0, 0, 1, 0, 1, 1, 2, 0, 0, 0, 3, 2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 2, 2, 0, 2, 1, 1, 2, 0, 0, 1, 0, 2, 0, 2, 1, 2, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 2, 0,
    0, 3, 3, 2, 2, 3, 3, 3, 2, 2, 2, 0, 2, 2, 3, 2, 0, 0, 3, 1, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 2, 1, 0, 3, 0, 3, 0, 1, 2, 2, 3, 3, 2, 3, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 1, 3, 3, 3, 1, 0, 3, 3, 0, 2, 0, 2, 1, 1, 0, 0, 0, 0, 0, 2, 2, 0, 0, 2, 1, 0, 0, 1, 0, 2, 1, 1, 2, 0, 2, 1, 2, 1, 2, 0, 1, 0, 2, 1, 2, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 2, 0, 0, 0, 1, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 0, 3, 3, 3, 0, 0, 3, 1, 0, 0, 0, 2, 0, 0, 3, 0, 0, 0, 1, 2, 2, 0, 1, 1, 1, 0, 0, 2, 0, 2, 1, 2, 3, 0, 2, 1, 1, 0, 1, 0, 2, 0, 3, 2, 2, 2, 0, 2, 1, 0, 2, 1, 0, 0, 2, 2, 2, 1, 0, 0,
    0, 3, 3, 2, 0, 3, 3, 0, 1, 1, 2, 1, 0, 0, 0, 1, 0, 0, 2, 0, 1, 0, 2, 3, 2, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 3, 1, 2, 1, 0, 0, 1, 0, 0, 1, 3, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 0,
    0, 3, 2, 0, 0, 3, 3, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 2, 3, 2, 0, 0, 1, 1, 0, 0, 1, 0, 3, 2, 1, 3, 0, 2, 1, 0, 1, 1, 0, 2, 0, 2, 2, 2, 1, 1, 2, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0,
    0, 0, 0, 3, 2, 2, 0, 2, 3, 1, 0, 2, 2, 0, 2, 2, 1, 1, 0, 0, 2, 3, 0, 3, 2, 0, 2, 2, 2, 0, 0, 2, 0, 2, 3, 2, 2, 0, 3, 3, 0, 0, 2, 2, 3, 0, 1, 3, 2, 2, 2, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 2, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 0, 3, 3, 1, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 3, 2, 0, 0, 2, 0, 0, 0, 0, 1, 2, 1, 1, 2, 0, 2, 1, 1, 0, 1, 1, 0, 1, 2, 2, 2, 1, 0, 2, 0, 0, 1, 1, 0, 0, 2, 1, 1, 0, 0, 0,
    0, 3, 3, 0, 0, 3, 3, 2, 0, 0, 2, 1, 0, 0, 0, 3, 0, 1, 2, 0, 1, 0, 1, 2, 2, 0, 0, 1, 2, 2, 0, 1, 0, 2, 1, 1, 2, 0, 1, 1, 1, 0, 2, 0, 2, 2, 2, 2, 2, 2, 0, 2, 0, 0, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 2, 1, 0, 3, 1, 2, 1, 0, 1, 1, 1, 3, 2, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 0, 0, 3, 2, 3, 0, 1, 2, 1, 2, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 3, 3, 3, 0, 0, 3, 2, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 2, 0, 1, 0, 1, 1, 0, 2, 0, 1, 1, 0, 2, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 3, 3, 0, 1, 3, 3, 2, 1, 0, 3, 0, 1, 0, 3, 1, 2, 0, 1, 3, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 2, 3, 2, 3, 1, 0, 2, 2, 0, 0, 2, 3, 0, 0, 1, 0, 2, 0, 1, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0, 2, 2, 2, 3, 0, 1, 2, 1, 0, 2, 1, 0, 1, 2, 1, 2, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 0, 3, 3, 1, 0, 0, 2, 1, 0, 0, 0, 1, 0, 1, 2, 0, 0, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1,
    0, 1, 2, 2, 2, 1, 0, 2, 3, 2, 2, 2, 2, 0, 2, 2, 2, 0, 0, 0, 1, 0, 0, 2, 2, 1, 0, 2, 2, 0, 0, 2, 0, 2, 2, 3, 3, 0, 2, 2, 1, 0, 0, 0, 2, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 0, 1, 0,
    0, 3, 3, 0, 0, 2, 3, 2, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 2, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 2, 0, 2, 1, 0, 0, 0, 0, 1, 0, 1, 2, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 2, 1, 0, 0, 2, 1, 2, 1, 2, 2, 2, 1, 1, 2, 2, 0, 0, 2, 1, 0, 1, 1, 2, 0, 2, 1, 0, 0, 1, 0, 2, 2, 2, 0, 1, 2, 2, 1, 0, 1, 0, 1, 0, 1, 1, 1, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 2, 3, 2, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 2, 0, 0, 2, 1, 0, 0, 2, 0, 1, 1, 2, 2, 0, 2, 2, 3, 0, 0, 0, 0, 0, 2, 1, 2, 1, 0, 1, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 3, 2, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 2, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 2, 0, 0, 0, 1, 2, 2, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 1, 1, 0, 2, 2, 2, 0, 1, 1, 1, 2, 0, 2, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 2, 2, 2, 0, 1, 0, 3, 1, 3, 2, 0, 2, 1, 1, 0, 0, 2, 1, 0, 1, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 1, 2, 2, 2, 0, 2, 2, 1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 3, 3, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 2, 2, 1, 0, 2, 0, 2, 0, 1, 0, 2, 2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 2, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 2, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP775_LITHUANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 42, 49, 39, 46, 47, 44, 54, 36, 50, 31, 38, 34, 28, 48,
    24, 100, 35, 27, 33, 51, 45, 101, 102, 59, 58, 253, 253, 253, 253, 253,
    253, 1, 20, 26, 14, 5, 25, 16, 40, 2, 17, 9, 11, 12, 8, 6,
    13, 103, 7, 3, 4, 10, 15, 104, 105, 18, 43, 253, 253, 253, 253, 251,
    106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121,
    122, 123, 124, 125, 126, 127, 253, 128, 129, 130, 131, 132, 253, 133, 253, 253,
    134, 135, 136, 137, 138, 139, 253, 253, 253, 253, 253, 252, 252, 140, 253, 253,
    253, 253, 253, 253, 253, 61, 56, 62, 60, 253, 253, 253, 253, 55, 53, 253,
    253, 253, 253, 253, 253, 253, 64, 63, 253, 253, 253, 253, 253, 253, 253, 57,
    32, 37, 52, 22, 30, 21, 19, 41, 29, 253, 253, 253, 253, 253, 253, 253,
    141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP775_LITHUANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP775",
    language: "Lithuanian",
    char_to_order_map: &CP775_LITHUANIAN_CHAR_TO_ORDER,
    language_model: &LITHUANIAN_LANG_MODEL,
    typical_positive_ratio: 0.962000,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_13_LITHUANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 42, 49, 39, 46, 47, 44, 54, 36, 50, 31, 38, 34, 28, 48,
    24, 100, 35, 27, 33, 51, 45, 101, 102, 59, 58, 253, 253, 253, 253, 253,
    253, 1, 20, 26, 14, 5, 25, 16, 40, 2, 17, 9, 11, 12, 8, 6,
    13, 103, 7, 3, 4, 10, 15, 104, 105, 18, 43, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 106, 253, 107, 253, 253, 251, 253, 108,
    253, 253, 252, 252, 253, 109, 253, 253, 110, 252, 111, 253, 252, 252, 252, 112,
    61, 55, 113, 114, 115, 116, 62, 117, 56, 118, 119, 60, 120, 121, 122, 123,
    53, 124, 125, 126, 127, 128, 129, 253, 64, 130, 131, 63, 132, 133, 57, 134,
    32, 30, 135, 136, 137, 138, 52, 139, 37, 140, 141, 22, 142, 143, 144, 145,
    21, 146, 147, 148, 149, 150, 151, 253, 19, 152, 153, 41, 154, 155, 29, 253,
];

pub(crate) static ISO_8859_13_LITHUANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-13",
    language: "Lithuanian",
    char_to_order_map: &ISO_8859_13_LITHUANIAN_CHAR_TO_ORDER,
    language_model: &LITHUANIAN_LANG_MODEL,
    typical_positive_ratio: 0.962000,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_4_LITHUANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 42, 49, 39, 46, 47, 44, 54, 36, 50, 31, 38, 34, 28, 48,
    24, 100, 35, 27, 33, 51, 45, 101, 102, 59, 58, 253, 253, 253, 253, 253,
    253, 1, 20, 26, 14, 5, 25, 16, 40, 2, 17, 9, 11, 12, 8, 6,
    13, 103, 7, 3, 4, 10, 15, 104, 105, 18, 43, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 61, 106, 107, 253, 108, 109, 253, 253, 53, 110, 111, 112, 251, 57, 253,
    253, 32, 253, 113, 253, 114, 115, 116, 253, 21, 117, 118, 119, 120, 29, 121,
    122, 123, 124, 125, 126, 127, 128, 55, 56, 129, 62, 130, 60, 131, 132, 133,
    134, 135, 136, 137, 138, 139, 140, 253, 141, 64, 142, 143, 144, 145, 63, 146,
    147, 148, 149, 150, 151, 152, 153, 30, 37, 154, 52, 155, 22, 156, 157, 158,
    159, 160, 161, 162, 163, 164, 165, 253, 166, 19, 167, 168, 169, 170, 41, 253,
];

pub(crate) static ISO_8859_4_LITHUANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-4",
    language: "Lithuanian",
    char_to_order_map: &ISO_8859_4_LITHUANIAN_CHAR_TO_ORDER,
    language_model: &LITHUANIAN_LANG_MODEL,
    typical_positive_ratio: 0.962000,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1257_LITHUANIAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 42, 49, 39, 46, 47, 44, 54, 36, 50, 31, 38, 34, 28, 48,
    24, 100, 35, 27, 33, 51, 45, 101, 102, 59, 58, 253, 253, 253, 253, 253,
    253, 1, 20, 26, 14, 5, 25, 16, 40, 2, 17, 9, 11, 12, 8, 6,
    13, 103, 7, 3, 4, 10, 15, 104, 105, 18, 43, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 255, 253, 255, 253, 106, 253,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 255, 253, 255, 253, 253, 255,
    253, 255, 253, 253, 253, 255, 253, 253, 107, 253, 108, 253, 253, 251, 253, 109,
    253, 253, 252, 252, 253, 110, 253, 253, 111, 252, 112, 253, 252, 252, 252, 113,
    61, 55, 114, 115, 116, 117, 62, 118, 56, 119, 120, 60, 121, 122, 123, 124,
    53, 125, 126, 127, 128, 129, 130, 253, 64, 131, 132, 63, 133, 134, 57, 135,
    32, 30, 136, 137, 138, 139, 52, 140, 37, 141, 142, 22, 143, 144, 145, 146,
    21, 147, 148, 149, 150, 151, 152, 253, 19, 153, 154, 41, 155, 156, 29, 253,
];

pub(crate) static WINDOWS_1257_LITHUANIAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1257",
    language: "Lithuanian",
    char_to_order_map: &WINDOWS_1257_LITHUANIAN_CHAR_TO_ORDER,
    language_model: &LITHUANIAN_LANG_MODEL,
    typical_positive_ratio: 0.962000,
    keep_ascii_letters: false,
    reversed: false,
};
