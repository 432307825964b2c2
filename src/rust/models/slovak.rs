// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static SLOVAK_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3, 3, 0, 3, 0, 0, 1, 3, 3, 3, 1, 0, 2, 3, 2, 1, 0, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 2, 0, 0,
    0, 2, 2, 1, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 1, 3, 3, 0, 3, 0, 0, 1, 1, 3, 3, 1, 0, 3, 3, 3, 1, 0, 0, 0, 1, 2, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 2, 0, 1,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 3, 3, 2, 3, 3, 0, 3, 0, 1, 2, 3, 3, 3, 0, 0, 3, 3, 3, 1, 0, 1, 1, 1, 3, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 2, 0, 3, 1, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 3, 2, 3, 3, 2, 2, 3, 1, 3, 3, 1, 1, 3, 3, 3, 3, 3, 0, 1, 3, 1, 0, 3, 3, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 0, 2, 3, 3, 3, 0, 1, 0, 3, 2, 3, 1, 0, 3, 3, 1, 0, 0, 0, 0, 0, 3, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 3, 1, 2, 3, 1, 0, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 1, 3, 1, 3, 1, 3, 3, 3, 1, 3, 1, 1, 1, 3, 3, 0, 3, 0, 1, 2, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 0, 3, 0, 2, 3, 3, 0, 3, 2, 3, 3, 3, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 2, 0, 0, 1, 1, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 0, 2, 3, 3, 3, 2, 1, 3, 3, 1, 2, 3, 1, 0, 2, 1, 3, 3, 2, 0, 1, 1, 1, 0, 0, 3, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 3, 2, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 1, 2, 2, 3, 3, 2, 1, 0, 2, 1, 2, 2, 1, 0, 3, 1, 1, 0, 2, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 2, 1, 2, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 1, 3, 3, 2, 2, 0, 3, 1, 3, 3, 1, 0, 1, 1, 3, 3, 3, 0, 1, 2, 1, 0, 0, 1, 3, 1, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 3, 1, 0, 1, 1, 1, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 2, 2, 3, 3, 3, 3, 1, 1, 3, 2, 1, 3, 2, 0, 3, 2, 2, 3, 2, 0, 1, 2, 1, 1, 2, 2, 0, 1, 0, 1, 1, 1, 2, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1, 0, 2, 0, 0,
    0, 3, 1, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3, 3, 2, 1, 2, 3, 0, 2, 0, 0, 0, 2, 3, 3, 0, 0, 2, 3, 2, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 2, 3, 2, 1, 2, 2, 2, 2, 3, 0, 2, 1, 1, 0, 1, 1, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 1, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 2, 1, 3, 3, 2, 3, 1, 2, 0, 3, 3, 2, 3, 1, 0, 1, 2, 1, 3, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 3, 1, 3, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 1, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 1, 0, 0, 3, 0, 3, 3, 3, 3, 3, 2, 3, 1, 3, 3, 3, 0, 1, 3, 0, 2, 3, 1, 2, 0, 0, 0, 1, 2, 1, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 2, 3, 3, 1, 2, 1, 3, 1, 2, 3, 1, 3, 2, 2, 1, 1, 2, 0, 0, 1, 1, 0, 2, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 2, 1, 3, 0, 1, 3, 2, 3, 1, 1, 1, 0, 1, 1, 2, 3, 0, 2, 1, 0, 2, 2, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 2, 1, 3, 0, 2, 3, 3, 2, 3, 3, 2, 1, 2, 3, 2, 0, 3, 2, 1, 3, 1, 0, 2, 0, 0, 0, 3, 3, 2, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0,
    0, 3, 3, 3, 3, 3, 3, 1, 3, 1, 1, 1, 3, 3, 1, 1, 0, 3, 1, 2, 3, 1, 0, 3, 2, 3, 2, 1, 0, 0, 0, 0, 0, 1, 1, 3, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 3, 3, 2, 1, 1, 1, 2, 3, 2, 1, 1, 1, 0, 0, 1, 0, 2, 2, 0, 1, 3, 1, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 1, 0, 0, 3, 0, 3, 3, 3, 3, 3, 3, 3, 0, 1, 3, 2, 0, 1, 3, 0, 1, 1, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 0, 1, 3, 0, 0, 3, 2, 3, 1, 1, 0, 0, 0, 1, 0, 0, 1, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 3, 3, 1, 2, 2, 1, 2, 1, 0, 3, 2, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 0, 3, 0, 1, 1, 0, 1, 1, 0, 2, 3, 2, 0, 0, 1, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 0, 3, 2, 3, 2, 2, 2, 2, 0, 3, 2, 2, 0, 3, 3, 0, 2, 0, 0, 3, 0, 0, 0, 3, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 0, 2, 1, 0, 1, 3, 0, 3, 3, 1, 0, 1, 2, 0, 0, 0, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 1, 2, 3, 1, 2, 2, 1, 1, 1, 1, 2, 0, 1, 2, 0, 1, 1, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 3, 2, 0, 1, 3, 1, 0, 1, 1, 1, 2, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 2, 3, 2, 2, 0, 0, 3, 2, 0, 2, 2, 1, 2, 2, 1, 1, 1, 2, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0,
    0, 3, 2, 3, 0, 3, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 3, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 2, 2, 2, 3, 1, 0, 0, 2, 0, 1, 3, 2, 2, 1, 2, 0, 1, 2, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1,
    0, 3, 3, 3, 1, 3, 3, 2, 3, 0, 1, 0, 2, 3, 2, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 3, 0, 2, 3, 1, 3, 3, 2, 2, 0, 1, 0, 1, 0, 0, 0, 1, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 3, 0, 0, 2, 1, 2, 0, 3, 1, 2, 0, 2, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 2, 2, 2, 1, 2, 1, 0, 3, 2, 3, 2, 2, 2, 0, 1, 0, 1, 0, 2, 2, 2, 0, 0, 1, 1, 0, 3, 1, 0, 0, 2, 1, 0, 0, 0, 2, 2, 3, 2, 1, 0, 1, 1, 1, 2, 2, 1, 2, 2, 1, 1, 2, 2, 1, 0, 1, 0, 0, 1, 0, 0, 1, 1,
    0, 0, 0, 0, 1, 0, 1, 1, 1, 2, 2, 2, 1, 0, 3, 1, 1, 0, 3, 1, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 1, 2, 2, 0, 0, 2, 1, 2, 1, 3, 0, 3, 2, 2, 2, 0, 2, 0, 2, 1, 2, 1, 1, 1, 0, 1, 2, 0, 0, 0, 0, 0, 1,
    0, 2, 3, 3, 0, 2, 3, 1, 0, 1, 0, 0, 2, 2, 0, 1, 0, 2, 0, 1, 3, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 2, 1, 0, 0, 0, 2, 1, 2, 2, 0, 0, 2, 1, 1, 1, 2, 1, 2, 2, 2, 1, 2, 1, 2, 0, 2, 0, 0, 1, 0, 0, 1, 0,
    0, 1, 0, 0, 2, 1, 2, 1, 1, 1, 2, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1, 1, 0, 2, 0, 2, 1, 2, 0, 3, 2, 2, 2, 1, 2, 1, 2, 1, 2, 2, 1, 1, 0, 1, 2, 0, 0, 0, 0, 1, 1,
    0, 2, 2, 3, 2, 2, 2, 2, 0, 0, 1, 1, 2, 1, 0, 0, 2, 1, 0, 0, 3, 1, 0, 1, 1, 2, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 2, 2, 1, 2, 0, 0, 1, 1, 2, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0,
    0, 1, 2, 2, 1, 3, 0, 0, 3, 0, 2, 1, 1, 2, 1, 1, 0, 0, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 2, 2, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 2, 2, 0, 0, 0, 2, 3, 1, 2, 1, 0, 1, 2, 1, 2, 2, 1, 3, 2, 2, 1, 1, 2, 1, 0, 1, 1, 1, 1, 0, 0, 1, 1,
    0, 3, 3, 3, 1, 2, 1, 2, 0, 0, 0, 1, 1, 2, 0, 0, 0, 2, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 2, 1, 0, 0, 0, 1, 1, 1, 2, 0, 0, 1, 1, 0, 1, 2, 1, 3, 2, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1,
    0, 3, 3, 1, 2, 1, 1, 1, 0, 2, 0, 0, 3, 1, 2, 2, 0, 2, 1, 0, 1, 1, 1, 2, 0, 0, 1, 1, 0, 0, 0, 0, 2, 0, 0, 1, 1, 3, 0, 2, 1, 0, 0, 1, 0, 1, 1, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 1, 1, 1, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 2, 2, 1, 1, 1, 0, 2, 1, 0, 1, 2, 2, 2, 1, 1, 0, 2, 1, 1, 0, 2, 1, 0, 0, 0, 0, 1, 0,
    0, 0, 0, 0, 3, 0, 1, 1, 1, 1, 0, 1, 1, 0, 2, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 1, 0, 0, 2, 2, 1, 2, 1, 0, 1, 2, 1, 2, 2, 3, 2, 2, 0, 1, 1, 2, 2, 0, 0, 1, 0, 0, 0, 0, 2, 0,
    0, 2, 3, 2, 1, 2, 1, 0, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 2, 0, 0, 0, 1, 2, 1, 2, 1, 0, 2, 1, 0, 1, 2, 1, 2, 1, 1, 1, 1, 1, 2, 0, 0, 0, 1, 1, 0, 0, 1, 0,
    0, 0, 0, 0, 2, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 1, 0, 0, 2, 1, 2, 1, 0, 2, 2, 2, 1, 2, 1, 2, 1, 2, 1, 1, 2, 2, 1, 0, 0, 1, 0, 0, 0, 0, 2, 1,
    0, 3, 2, 2, 0, 2, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 2, 2, 1, 2, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 1, 3, 1, 1, 1, 2, 2, 1, 1, 1, 2, 1, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 0, 0, 0, 2, 1, 2, 0, 1, 1, 2, 1, 0, 1, 2, 0, 2, 2, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1,
    0, 3, 2, 2, 0, 2, 2, 0, 0, 0, 0, 0, 1, 3, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 3, 1, 2, 0, 0, 1, 2, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    0, 3, 3, 2, 1, 2, 2, 0, 1, 1, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 1, 2, 1, 1, 2, 0, 0, 1, 1, 0, 1, 1, 1, 1, 1, 2, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 1, 2, 1, 1, 2, 1, 2, 1, 0, 0, 1, 2, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 2, 1, 2, 1, 1, 0, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 0, 2, 2, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 2, 1, 1, 0, 0, 1, 1, 0, 1, 2, 1, 1, 1, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 0, 0, 0, 3, 0, 2, 0, 1, 0, 2, 0, 0, 0, 3, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 0, 1, 1, 0, 0, 1, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 1, 0, 0, 1, 1, 1, 0, 1, 1, 2, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 1, 0, 3, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 1, 2, 1, 2, 1, 1, 2, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 1, 2, 1, 2, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 1, 1, 2, 1, 1, 0, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0,
    0, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
];

static CP852_SLOVAK_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 39, 51, 45, 47, 48, 54, 53, 56, 46, 63, 52, 49, 43, 32, 37,
    31, 77, 42, 36, 38, 50, 40, 66, 62, 65, 44, 253, 253, 253, 253, 253,
    253, 1, 18, 19, 14, 3, 33, 30, 21, 5, 22, 11, 12, 15, 4, 2,
    10, 76, 6, 7, 8, 13, 9, 59, 41, 20, 16, 253, 253, 253, 253, 251,
    100, 101, 26, 102, 60, 103, 104, 105, 106, 107, 108, 109, 110, 111, 84, 112,
    75, 83, 67, 58, 113, 71, 35, 114, 115, 116, 117, 78, 28, 118, 253, 24,
    17, 23, 55, 27, 119, 120, 72, 29, 121, 122, 253, 123, 57, 124, 253, 253,
    253, 253, 253, 253, 253, 70, 125, 126, 127, 253, 253, 253, 253, 128, 129, 253,
    253, 253, 253, 253, 253, 253, 130, 131, 253, 253, 253, 253, 253, 253, 253, 253,
    132, 133, 82, 134, 69, 81, 73, 135, 136, 253, 253, 253, 253, 137, 138, 253,
    79, 139, 140, 141, 142, 61, 68, 34, 143, 64, 80, 144, 25, 74, 145, 253,
    251, 253, 253, 146, 253, 253, 253, 253, 253, 253, 253, 147, 148, 149, 253, 253,
];

pub(crate) static CP852_SLOVAK_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP852",
    language: "Slovak",
    char_to_order_map: &CP852_SLOVAK_CHAR_TO_ORDER,
    language_model: &SLOVAK_LANG_MODEL,
    typical_positive_ratio: 0.933358,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_16_SLOVAK_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 39, 51, 45, 47, 48, 54, 53, 56, 46, 63, 52, 49, 43, 32, 37,
    31, 77, 42, 36, 38, 50, 40, 66, 62, 65, 44, 253, 253, 253, 253, 253,
    253, 1, 18, 19, 14, 3, 33, 30, 21, 5, 22, 11, 12, 15, 4, 2,
    10, 76, 6, 7, 8, 13, 9, 59, 41, 20, 16, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 100, 101, 102, 253, 253, 68, 253, 34, 253, 103, 253, 104, 251, 105, 106,
    253, 253, 57, 107, 72, 253, 253, 253, 29, 24, 108, 253, 109, 110, 111, 112,
    113, 70, 114, 115, 84, 116, 117, 118, 119, 75, 120, 121, 122, 73, 123, 124,
    125, 126, 127, 79, 128, 129, 130, 131, 132, 133, 64, 134, 135, 136, 137, 138,
    139, 17, 140, 141, 60, 142, 143, 144, 145, 26, 146, 147, 148, 23, 149, 150,
    151, 152, 153, 55, 58, 154, 155, 156, 157, 158, 27, 159, 160, 161, 162, 163,
];

pub(crate) static ISO_8859_16_SLOVAK_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-16",
    language: "Slovak",
    char_to_order_map: &ISO_8859_16_SLOVAK_CHAR_TO_ORDER,
    language_model: &SLOVAK_LANG_MODEL,
    typical_positive_ratio: 0.936395,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_2_SLOVAK_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 39, 51, 45, 47, 48, 54, 53, 56, 46, 63, 52, 49, 43, 32, 37,
    31, 77, 42, 36, 38, 50, 40, 66, 62, 65, 44, 253, 253, 253, 253, 253,
    253, 1, 18, 19, 14, 3, 33, 30, 21, 5, 22, 11, 12, 15, 4, 2,
    10, 76, 6, 7, 8, 13, 9, 59, 41, 20, 16, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 100, 253, 101, 253, 71, 102, 253, 253, 68, 103, 78, 104, 251, 72, 105,
    253, 106, 253, 107, 253, 35, 108, 109, 253, 34, 110, 28, 111, 253, 29, 112,
    113, 70, 114, 115, 84, 83, 116, 117, 57, 75, 118, 119, 120, 73, 121, 82,
    122, 123, 81, 79, 124, 125, 126, 253, 127, 128, 64, 129, 130, 74, 131, 132,
    80, 17, 133, 134, 60, 67, 135, 136, 24, 26, 137, 138, 139, 23, 140, 69,
    141, 142, 61, 55, 58, 143, 144, 253, 145, 146, 27, 147, 148, 25, 149, 253,
];

pub(crate) static ISO_8859_2_SLOVAK_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-2",
    language: "Slovak",
    char_to_order_map: &ISO_8859_2_SLOVAK_CHAR_TO_ORDER,
    language_model: &SLOVAK_LANG_MODEL,
    typical_positive_ratio: 0.933358,
    keep_ascii_letters: true,
    reversed: false,
};

static MACLATIN2_SLOVAK_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 39, 51, 45, 47, 48, 54, 53, 56, 46, 63, 52, 49, 43, 32, 37,
    31, 77, 42, 36, 38, 50, 40, 66, 62, 65, 44, 253, 253, 253, 253, 253,
    253, 1, 18, 19, 14, 3, 33, 30, 21, 5, 22, 11, 12, 15, 4, 2,
    10, 76, 6, 7, 8, 13, 9, 59, 41, 20, 16, 253, 253, 253, 253, 251,
    84, 100, 101, 75, 102, 103, 104, 17, 105, 57, 60, 24, 106, 107, 26, 108,
    109, 82, 23, 69, 110, 111, 112, 55, 113, 58, 114, 115, 27, 116, 117, 118,
    253, 253, 119, 253, 253, 253, 253, 120, 253, 253, 253, 121, 253, 253, 122, 123,
    124, 125, 253, 253, 126, 127, 253, 253, 128, 129, 130, 71, 35, 83, 67, 131,
    132, 133, 253, 253, 134, 81, 253, 253, 253, 253, 253, 61, 135, 136, 137, 138,
    253, 253, 253, 253, 253, 253, 253, 253, 139, 140, 80, 141, 253, 253, 142, 143,
    144, 68, 253, 253, 34, 145, 146, 70, 78, 28, 73, 72, 29, 147, 79, 148,
    149, 150, 64, 151, 152, 153, 154, 155, 74, 25, 156, 157, 158, 159, 160, 161,
];

pub(crate) static MACLATIN2_SLOVAK_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacLatin2",
    language: "Slovak",
    char_to_order_map: &MACLATIN2_SLOVAK_CHAR_TO_ORDER,
    language_model: &SLOVAK_LANG_MODEL,
    typical_positive_ratio: 0.933358,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1250_SLOVAK_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 39, 51, 45, 47, 48, 54, 53, 56, 46, 63, 52, 49, 43, 32, 37,
    31, 77, 42, 36, 38, 50, 40, 66, 62, 65, 44, 253, 253, 253, 253, 253,
    253, 1, 18, 19, 14, 3, 33, 30, 21, 5, 22, 11, 12, 15, 4, 2,
    10, 76, 6, 7, 8, 13, 9, 59, 41, 20, 16, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 68, 253, 100, 78, 72, 101,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 34, 253, 102, 28, 29, 103,
    253, 104, 253, 105, 253, 106, 253, 253, 253, 253, 107, 253, 253, 251, 253, 108,
    253, 253, 253, 109, 253, 110, 253, 253, 253, 111, 112, 253, 71, 253, 35, 113,
    114, 70, 115, 116, 84, 83, 117, 118, 57, 75, 119, 120, 121, 73, 122, 82,
    123, 124, 81, 79, 125, 126, 127, 253, 128, 129, 64, 130, 131, 74, 132, 133,
    80, 17, 134, 135, 60, 67, 136, 137, 24, 26, 138, 139, 140, 23, 141, 69,
    142, 143, 61, 55, 58, 144, 145, 253, 146, 147, 27, 148, 149, 25, 150, 253,
];

pub(crate) static WINDOWS_1250_SLOVAK_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1250",
    language: "Slovak",
    char_to_order_map: &WINDOWS_1250_SLOVAK_CHAR_TO_ORDER,
    language_model: &SLOVAK_LANG_MODEL,
    typical_positive_ratio: 0.933358,
    keep_ascii_letters: true,
    reversed: false,
};
