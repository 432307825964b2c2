// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static FRENCH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 1, 1, 2, 3, 1, 1, 1, 1, 1, 0, 0, 1, 1, 2, 1, 3, 0, 2, 0, 1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 2, 0, 0, 1, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 2, 3, 3, 2, 3, 2, 3, 3, 2, 2, 3, 1, 3, 1, 0, 1, 1, 1, 3, 1, 1, 1, 1, 1, 2, 1, 1, 0, 1, 1, 1, 0, 2, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 0, 0, 1, 0, 1, 3, 1, 0, 1, 1, 0, 3, 1, 1, 1, 2, 0, 3, 1, 2, 0, 0, 2, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 1, 1, 3, 0, 1, 0, 1, 1, 0, 0, 1, 0, 3, 1, 3, 0, 3, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 1, 0, 2, 0, 1, 2, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 2, 2, 3, 3, 1, 3, 0, 0, 1, 1, 1, 3, 1, 1, 1, 2, 1, 1, 0, 1, 1, 2, 0, 2, 3, 2, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 2, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 3, 0, 0, 1, 1, 1, 3, 1, 1, 1, 2, 1, 3, 0, 1, 1, 1, 1, 1, 3, 2, 0, 0, 0, 0, 1, 0, 1, 3, 0, 1, 1, 1, 0, 0, 0, 2, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 2, 2, 3, 1, 1, 1, 2, 3, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 3, 1, 1, 1, 2, 1, 2, 3, 2, 1, 1, 1, 1, 0, 0, 1, 2, 0, 1, 1, 1, 0, 0, 0, 0, 1, 2, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3, 3, 2, 2, 3, 0, 0, 1, 1, 1, 3, 1, 1, 1, 0, 0, 1, 0, 1, 1, 3, 1, 2, 0, 3, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 2, 0, 1, 1, 0, 0, 0, 2, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 2, 1, 0, 0, 0, 0, 3, 1, 1, 1, 1, 0, 1, 0, 0, 1, 3, 0, 2, 3, 2, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0,
    0, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 2, 1, 2, 2, 2, 3, 3, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 3, 2, 0, 1, 1, 0, 1, 1, 2, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 2, 3, 3, 2, 3, 2, 2, 2, 3, 2, 1, 2, 2, 1, 0, 1, 3, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 0, 2, 0, 1, 1, 2, 1, 2, 1, 2, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 2, 2, 3, 1, 1, 1, 1, 2, 0, 0, 0, 1, 1, 3, 1, 1, 0, 1, 1, 3, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 3, 1, 3, 1, 1, 1, 1, 2, 1, 0, 1, 2, 2, 2, 2, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 2, 2, 0, 0, 3, 0, 1, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 2, 2, 2, 3, 3, 2, 2, 2, 3, 3, 3, 2, 2, 1, 3, 2, 1, 1, 2, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 3, 0, 0, 1, 1, 0, 1, 3, 2, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 2, 2, 2, 3, 3, 3, 1, 3, 3, 1, 1, 1, 2, 0, 1, 0, 0, 1, 2, 0, 1, 1, 1, 1, 2, 0, 0, 1, 1, 0, 2, 1, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 2, 3, 3, 3, 2, 1, 2, 1, 3, 1, 3, 1, 1, 0, 1, 1, 2, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 2, 3, 3, 3, 3, 2, 2, 1, 1, 3, 3, 1, 1, 1, 1, 1, 1, 0, 2, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 3, 1, 1, 1, 0, 1, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 1, 2, 1, 2, 2, 1, 2, 2, 2, 1, 0, 1, 2, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 3, 0, 1, 0, 2, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 3, 1, 3, 3, 2, 1, 1, 1, 1, 3, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 2, 0, 0, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 2, 1, 1, 1, 1, 3, 2, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 1, 1, 3, 2, 2, 1, 1, 3, 3, 1, 3, 1, 1, 1, 1, 1, 1, 1, 2, 0, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 2, 3, 3, 2, 1, 2, 3, 3, 2, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 1, 3, 3, 0, 1, 0, 3, 2, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 3, 3, 3, 2, 2, 0, 2, 2, 1, 1, 1, 0, 0, 2, 1, 0, 2, 0, 0, 0, 2, 2, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 2, 0, 0, 0, 1, 0, 0, 0,
    0, 1, 3, 1, 1, 3, 3, 1, 1, 1, 2, 1, 1, 1, 2, 0, 1, 1, 0, 0, 1, 0, 3, 0, 3, 2, 2, 3, 3, 0, 3, 3, 3, 2, 3, 0, 0, 2, 2, 1, 2, 0, 0, 0, 2, 2, 2, 2, 1, 1, 3, 0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0,
    0, 1, 2, 0, 1, 3, 2, 1, 1, 1, 3, 2, 2, 1, 3, 0, 2, 1, 1, 1, 1, 1, 1, 1, 3, 3, 2, 2, 3, 1, 3, 3, 2, 2, 3, 0, 0, 3, 3, 1, 3, 0, 0, 0, 2, 2, 2, 2, 2, 1, 2, 0, 1, 1, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0,
    0, 1, 2, 1, 1, 3, 3, 3, 1, 3, 3, 2, 3, 2, 2, 0, 2, 3, 1, 2, 2, 0, 1, 1, 3, 1, 3, 1, 3, 1, 3, 3, 3, 2, 3, 0, 0, 1, 2, 2, 3, 1, 0, 0, 2, 1, 3, 2, 2, 0, 2, 0, 0, 1, 1, 1, 2, 1, 1, 1, 1, 0, 0, 2,
    0, 3, 1, 3, 3, 1, 1, 2, 2, 3, 1, 0, 2, 2, 1, 2, 0, 0, 2, 0, 1, 1, 0, 2, 2, 3, 3, 3, 3, 1, 3, 3, 2, 2, 2, 0, 0, 2, 1, 0, 2, 0, 0, 1, 2, 1, 2, 2, 2, 2, 1, 1, 1, 1, 1, 0, 2, 2, 0, 0, 1, 0, 0, 0,
    0, 3, 2, 3, 3, 2, 2, 2, 3, 3, 1, 1, 1, 2, 1, 2, 2, 1, 3, 1, 1, 1, 1, 2, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 3, 1, 2, 3, 0, 3, 0, 3, 2, 2, 0, 2, 0, 0, 2, 0, 0, 2, 0, 1, 0, 0, 3, 2, 3, 3, 3, 2, 0, 2, 2, 3, 2, 1, 0, 0, 3, 2, 0, 1, 0, 0, 1, 2, 2, 1, 1, 1, 2, 1, 0, 1, 1, 1, 0, 2, 0, 0, 0, 1, 1, 0, 0,
    0, 3, 0, 1, 3, 1, 2, 2, 3, 2, 2, 1, 1, 1, 0, 1, 0, 1, 3, 0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 0, 3, 2, 2, 2, 1, 0, 0, 3, 1, 0, 2, 0, 0, 1, 2, 1, 1, 1, 1, 3, 1, 1, 1, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 2, 1, 1, 1, 2, 2, 0, 1, 0, 1, 1, 3, 0, 0, 1, 0, 1, 0, 1, 1, 2, 3, 3, 3, 2, 0, 3, 2, 2, 2, 2, 1, 0, 3, 2, 0, 2, 0, 0, 0, 2, 2, 1, 2, 2, 1, 1, 1, 2, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 0, 3, 0, 3, 2, 2, 0, 0, 0, 0, 1, 0, 0, 2, 0, 2, 1, 0, 1, 2, 3, 3, 3, 2, 1, 3, 3, 3, 2, 2, 0, 0, 2, 2, 0, 2, 0, 0, 1, 2, 1, 1, 2, 0, 1, 1, 0, 1, 2, 1, 0, 2, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 2, 1, 1, 0, 3, 2, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 3, 2, 2, 2, 1, 3, 2, 1, 1, 2, 0, 0, 3, 1, 1, 3, 1, 0, 0, 3, 2, 1, 2, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 0, 2, 3, 3, 1, 1, 3, 2, 2, 0, 3, 0, 2, 0, 0, 1, 1, 3, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 2, 1, 1, 2, 1, 0, 2, 3, 1, 0, 1, 2, 0, 2, 1, 0, 0, 1, 2, 1, 2, 2, 2, 1, 3, 3, 3, 3, 3, 0, 0, 1, 3, 1, 2, 1, 0, 0, 2, 2, 2, 2, 1, 1, 1, 0, 0, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 1, 1, 3, 2, 1, 0, 0, 0, 0, 2, 0, 0, 1, 1, 1, 1, 0, 1, 2, 3, 3, 3, 2, 0, 2, 1, 1, 2, 1, 0, 0, 3, 2, 0, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 1, 0, 3, 3, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 1, 2, 3, 0, 2, 0, 2, 2, 1, 1, 0, 1, 1, 3, 0, 1, 1, 1, 2, 0, 0, 1, 2, 3, 2, 2, 2, 0, 2, 1, 2, 2, 2, 1, 0, 2, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 2, 1, 2, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 3, 1, 1, 2, 2, 1, 1, 1, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 0, 3, 0, 0, 1, 0, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 2, 2, 1, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 2, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 1, 2, 1, 0, 3, 1, 3, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 2, 0, 0, 1, 0, 3, 2, 2, 1, 2, 1, 3, 2, 3, 2, 2, 0, 0, 1, 2, 1, 1, 1, 0, 0, 2, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 2, 0, 3, 1, 3, 1, 2, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 2, 2, 3, 2, 2, 0, 1, 1, 2, 2, 1, 0, 0, 2, 1, 1, 2, 0, 0, 0, 2, 2, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 3, 0, 2, 1, 2, 3, 2, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 2, 1, 2, 2, 2, 0, 2, 1, 2, 1, 1, 0, 0, 2, 2, 1, 1, 0, 0, 1, 1, 2, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0,
    0, 2, 1, 2, 2, 1, 2, 2, 2, 3, 1, 1, 1, 0, 0, 2, 0, 0, 2, 1, 0, 0, 0, 0, 1, 2, 2, 2, 2, 0, 2, 1, 2, 2, 3, 0, 0, 2, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0,
    0, 3, 1, 2, 3, 0, 2, 0, 3, 1, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 1, 1, 1, 2, 2, 2, 1, 0, 1, 1, 2, 1, 1, 0, 0, 1, 2, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 0, 1, 2, 0, 1, 0, 2, 2, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 3, 3, 2, 1, 1, 2, 1, 1, 1, 1, 0, 0, 2, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 2, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0,
    0, 0, 1, 2, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 2, 2, 1, 1, 0, 2, 1, 1, 2, 0, 0, 0, 1, 2, 0, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0,
    0, 0, 0, 1, 0, 2, 1, 3, 1, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 1, 2, 0, 0, 2, 1, 3, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 2, 0, 0, 1, 0, 1, 2, 1, 2, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 2, 2, 1, 1, 0, 2, 2, 1, 0, 0, 0, 0, 1, 0, 0, 2, 0, 1, 0, 0, 1, 1, 2, 1, 1, 2, 0, 1, 2, 1, 2, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0,
    0, 2, 0, 2, 2, 1, 1, 0, 2, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 2, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 3, 0, 2, 0, 0, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 2, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 2, 0, 1, 1, 0, 2, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 1, 1, 0, 2, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 2, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 1, 2, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 2, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 2, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 3, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP037_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 61, 100, 36, 101, 102, 103, 59, 104, 253, 253, 253, 253, 253, 253,
    253, 15, 42, 67, 35, 105, 55, 62, 106, 107, 253, 253, 253, 253, 253, 253,
    253, 253, 72, 108, 70, 109, 110, 111, 74, 112, 253, 253, 253, 253, 253, 253,
    113, 52, 73, 114, 66, 115, 63, 116, 117, 253, 253, 253, 253, 253, 253, 253,
    118, 4, 19, 12, 11, 1, 17, 16, 18, 3, 253, 253, 119, 120, 121, 253,
    253, 39, 29, 10, 14, 5, 8, 13, 21, 6, 122, 123, 75, 253, 124, 253,
    125, 253, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 126, 127, 128, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 251, 51, 129, 130, 131, 132,
    253, 58, 53, 24, 38, 34, 37, 33, 57, 32, 252, 65, 69, 64, 133, 76,
    253, 253, 28, 30, 44, 48, 54, 50, 56, 60, 252, 71, 134, 135, 136, 137,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 138, 139, 140, 141, 251,
];

pub(crate) static CP037_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "French",
    char_to_order_map: &CP037_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970978,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 61, 100, 36, 101, 102, 103, 59, 104, 253, 253, 253, 253, 253, 253,
    253, 15, 42, 67, 35, 105, 55, 62, 106, 107, 253, 253, 253, 253, 253, 253,
    253, 253, 72, 108, 70, 109, 110, 111, 74, 112, 253, 253, 253, 253, 253, 253,
    113, 52, 73, 114, 66, 115, 63, 116, 117, 253, 253, 253, 253, 253, 253, 253,
    118, 4, 19, 12, 11, 1, 17, 16, 18, 3, 253, 253, 119, 120, 121, 253,
    253, 39, 29, 10, 14, 5, 8, 13, 21, 6, 122, 123, 75, 253, 124, 253,
    125, 253, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 126, 127, 128, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 251, 51, 129, 130, 131, 132,
    253, 58, 53, 24, 38, 34, 37, 33, 57, 32, 252, 65, 69, 64, 133, 76,
    253, 253, 28, 30, 44, 48, 54, 50, 56, 60, 252, 71, 134, 135, 136, 137,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 138, 139, 140, 141, 251,
];

pub(crate) static CP500_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "French",
    char_to_order_map: &CP500_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970978,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 58, 53, 24, 38, 34, 37,
    33, 57, 32, 28, 30, 44, 48, 54, 50, 56, 60, 253, 253, 253, 253, 253,
    253, 4, 19, 12, 11, 1, 17, 16, 18, 3, 39, 29, 10, 14, 5, 8,
    13, 21, 6, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 253, 253, 251,
    74, 69, 15, 61, 100, 36, 101, 59, 42, 67, 35, 62, 55, 102, 103, 104,
    52, 75, 105, 51, 106, 107, 65, 64, 76, 108, 109, 110, 253, 111, 253, 112,
    113, 114, 115, 116, 117, 118, 119, 120, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 121, 72, 70, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 122, 123, 253, 253, 253, 253, 253, 253, 253, 253,
    124, 125, 73, 126, 66, 127, 128, 63, 129, 253, 253, 253, 253, 253, 130, 253,
    131, 132, 71, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "French",
    char_to_order_map: &CP850_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970978,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 58, 53, 24, 38, 34, 37,
    33, 57, 32, 28, 30, 44, 48, 54, 50, 56, 60, 253, 253, 253, 253, 253,
    253, 4, 19, 12, 11, 1, 17, 16, 18, 3, 39, 29, 10, 14, 5, 8,
    13, 21, 6, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 253, 253, 251,
    74, 69, 15, 61, 100, 36, 101, 59, 42, 67, 35, 62, 55, 102, 103, 104,
    52, 75, 105, 51, 106, 107, 65, 64, 76, 108, 109, 110, 253, 111, 253, 112,
    113, 114, 115, 116, 117, 118, 119, 120, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 121, 72, 70, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 122, 123, 253, 253, 253, 253, 253, 253, 253, 253,
    124, 125, 73, 126, 66, 253, 127, 63, 128, 253, 253, 253, 253, 253, 129, 253,
    130, 131, 71, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "French",
    char_to_order_map: &CP858_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970978,
    keep_ascii_letters: true,
    reversed: false,
};

static CP863_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 58, 53, 24, 38, 34, 37,
    33, 57, 32, 28, 30, 44, 48, 54, 50, 56, 60, 253, 253, 253, 253, 253,
    253, 4, 19, 12, 11, 1, 17, 16, 18, 3, 39, 29, 10, 14, 5, 8,
    13, 21, 6, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 253, 253, 251,
    74, 69, 15, 61, 72, 36, 253, 59, 42, 67, 35, 62, 55, 253, 70, 253,
    52, 66, 73, 51, 100, 101, 65, 64, 253, 71, 102, 253, 253, 103, 104, 105,
    253, 253, 106, 107, 253, 253, 252, 253, 63, 253, 253, 252, 252, 252, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 253, 120, 121, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 122, 252, 253, 253,
];

pub(crate) static CP863_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP863",
    language: "French",
    char_to_order_map: &CP863_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970979,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 58, 53, 24, 38, 34, 37,
    33, 57, 32, 28, 30, 44, 48, 54, 50, 56, 60, 253, 253, 253, 253, 253,
    253, 4, 19, 12, 11, 1, 17, 16, 18, 3, 39, 29, 10, 14, 5, 8,
    13, 21, 6, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 100, 253, 101, 253, 102, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 103, 104, 253, 253, 105, 252, 106, 253, 107, 68, 108, 253,
    70, 109, 72, 110, 111, 112, 113, 74, 66, 52, 73, 114, 115, 116, 63, 117,
    118, 119, 120, 121, 71, 122, 123, 253, 124, 125, 126, 127, 128, 129, 130, 131,
    36, 132, 61, 133, 134, 135, 75, 59, 35, 15, 42, 67, 136, 137, 55, 62,
    138, 139, 140, 141, 51, 142, 143, 253, 144, 64, 145, 65, 69, 146, 147, 76,
];

pub(crate) static ISO_8859_15_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "French",
    char_to_order_map: &ISO_8859_15_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970924,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 58, 53, 24, 38, 34, 37,
    33, 57, 32, 28, 30, 44, 48, 54, 50, 56, 60, 253, 253, 253, 253, 253,
    253, 4, 19, 12, 11, 1, 17, 16, 18, 3, 39, 29, 10, 14, 5, 8,
    13, 21, 6, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    70, 103, 72, 104, 105, 106, 107, 74, 66, 52, 73, 108, 109, 110, 63, 111,
    112, 113, 114, 115, 71, 116, 117, 253, 118, 119, 120, 121, 122, 123, 124, 125,
    36, 126, 61, 127, 128, 129, 75, 59, 35, 15, 42, 67, 130, 131, 55, 62,
    132, 133, 134, 135, 51, 136, 137, 253, 138, 64, 139, 65, 69, 140, 141, 76,
];

pub(crate) static ISO_8859_1_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "French",
    char_to_order_map: &ISO_8859_1_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970978,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 58, 53, 24, 38, 34, 37,
    33, 57, 32, 28, 30, 44, 48, 54, 50, 56, 60, 253, 253, 253, 253, 253,
    253, 4, 19, 12, 11, 1, 17, 16, 18, 3, 39, 29, 10, 14, 5, 8,
    13, 21, 6, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 253, 253, 251,
    100, 101, 74, 52, 102, 103, 104, 105, 36, 61, 106, 107, 108, 59, 15, 35,
    42, 67, 109, 110, 55, 62, 111, 112, 113, 51, 114, 115, 116, 64, 65, 69,
    253, 253, 253, 253, 253, 253, 253, 117, 253, 253, 253, 253, 253, 253, 118, 119,
    253, 253, 253, 253, 253, 120, 253, 253, 253, 121, 253, 122, 123, 124, 75, 125,
    253, 253, 253, 253, 126, 253, 253, 253, 253, 253, 253, 70, 127, 128, 129, 68,
    253, 253, 253, 253, 253, 253, 253, 253, 76, 130, 253, 253, 253, 253, 131, 132,
    253, 253, 253, 253, 253, 72, 73, 133, 134, 66, 135, 63, 136, 137, 138, 71,
    251, 139, 140, 141, 142, 143, 144, 253, 253, 253, 253, 253, 253, 253, 253, 145,
];

pub(crate) static MACROMAN_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "French",
    char_to_order_map: &MACROMAN_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970924,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_FRENCH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 46, 31, 40, 25, 45, 47, 49, 26, 58, 53, 24, 38, 34, 37,
    33, 57, 32, 28, 30, 44, 48, 54, 50, 56, 60, 253, 253, 253, 253, 253,
    253, 4, 19, 12, 11, 1, 17, 16, 18, 3, 39, 29, 10, 14, 5, 8,
    13, 21, 6, 2, 7, 9, 20, 43, 22, 23, 41, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 102, 253, 103, 255, 104, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 68, 255, 106, 107,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 108, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 109, 253, 253, 253, 252, 110, 253, 252, 252, 252, 253,
    70, 111, 72, 112, 113, 114, 115, 74, 66, 52, 73, 116, 117, 118, 63, 119,
    120, 121, 122, 123, 71, 124, 125, 253, 126, 127, 128, 129, 130, 131, 132, 133,
    36, 134, 61, 135, 136, 137, 75, 59, 35, 15, 42, 67, 138, 139, 55, 62,
    140, 141, 142, 143, 51, 144, 145, 253, 146, 64, 147, 65, 69, 148, 149, 76,
];

pub(crate) static WINDOWS_1252_FRENCH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "French",
    char_to_order_map: &WINDOWS_1252_FRENCH_CHAR_TO_ORDER,
    language_model: &FRENCH_LANG_MODEL,
    typical_positive_ratio: 0.970924,
    keep_ascii_letters: true,
    reversed: false,
};
