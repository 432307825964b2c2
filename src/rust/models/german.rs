// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static GERMAN_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 2, 2, 1, 1, 1, 1, 0, 3, 2, 1, 1, 1, 3, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 1, 3, 0, 0, 1, 2, 1, 1, 0, 1, 0, 1, 1, 1, 1, 2, 2, 0, 0, 1, 1, 1, 1, 3, 1, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 0, 3, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 3, 0, 1, 0, 1, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 2, 3, 3, 3, 1, 3, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 0, 3, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 3, 3, 0, 1, 1, 1, 0, 1, 3, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 3, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 3, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 0, 1, 2, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 3, 0, 0, 0, 1, 0, 1, 3, 0, 0, 0, 2, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 2, 2, 3, 3, 2, 3, 2, 2, 1, 3, 1, 2, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 2, 3, 0, 1, 1, 0, 0, 2, 3, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 1, 2, 2, 2, 2, 2, 1, 2, 1, 2, 1, 2, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 2, 2, 0, 0, 1, 1, 0, 1, 2, 1, 1, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 2, 2, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 1, 1, 1, 0, 2, 0, 0, 1, 2, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 1, 3, 2, 1, 3, 2, 2, 2, 2, 2, 2, 0, 2, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 3, 0, 1, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 0, 1, 3, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 2, 0, 1, 0, 2, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 1, 2, 3, 2, 2, 2, 2, 1, 1, 3, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 2, 2, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 2, 2, 3, 3, 2, 2, 3, 3, 1, 2, 1, 1, 1, 3, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 1, 2, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 1, 3, 3, 2, 2, 3, 1, 3, 3, 1, 3, 3, 2, 2, 3, 2, 2, 0, 3, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 3, 0, 1, 0, 1, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 2, 2, 3, 2, 2, 2, 2, 2, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 2, 3, 0, 1, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 1, 3, 3, 1, 1, 2, 3, 1, 1, 2, 2, 0, 3, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 2, 2, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 1, 2, 2, 1, 2, 2, 3, 2, 1, 2, 1, 2, 0, 1, 1, 1, 2, 1, 1, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 3, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 1, 1, 3, 2, 3, 1, 1, 2, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 2, 2, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 1, 1, 3, 2, 2, 3, 2, 2, 1, 1, 1, 2, 1, 1, 1, 2, 3, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 1, 2, 2, 3, 2, 1, 3, 1, 3, 1, 1, 0, 1, 1, 1, 1, 1, 2, 1, 2, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 3, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 3, 1, 1, 3, 2, 0, 3, 3, 3, 0, 3, 1, 0, 0, 2, 3, 1, 1, 3, 3, 2, 2, 2, 3, 3, 2, 1, 1, 2, 2, 2, 2, 1, 1, 2, 3, 1, 1, 1, 2, 1, 2, 0, 0, 1, 2, 1, 0, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 3, 3, 3, 0, 3, 3, 0, 3, 1, 3, 3, 2, 3, 3, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 1, 2, 3, 2, 1, 3, 3, 3, 2, 1, 2, 2, 2, 3, 2, 3, 2, 1, 1, 3, 0, 1, 1, 3, 1, 3, 2, 2, 3, 2, 2, 3, 1, 1, 3, 1, 2, 0, 1, 1, 2, 2, 2, 0, 0, 1, 2, 1, 0, 2, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 1, 1, 2, 3, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 2, 2, 3, 1, 1, 2, 1, 3, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 1, 3, 2, 1, 2, 1, 1, 2, 2, 2, 2, 1, 1, 1, 1, 2, 1, 1, 0, 1, 2, 2, 1, 0, 0, 1, 1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 3, 1, 3, 3, 1, 3, 2, 1, 1, 0, 1, 1, 2, 2, 1, 1, 1, 0, 1, 2, 0, 2, 1, 2, 1, 3, 2, 1, 3, 3, 3, 3, 2, 2, 2, 2, 0, 0, 1, 1, 2, 1, 2, 2, 0, 1, 2, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 2, 3, 1, 0, 2, 2, 3, 0, 1, 0, 0, 0, 0, 0, 1, 1, 2, 2, 2, 1, 1, 3, 2, 2, 1, 2, 3, 1, 2, 2, 2, 1, 2, 3, 1, 2, 1, 2, 2, 1, 0, 1, 1, 2, 0, 0, 1, 0, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0,
    0, 2, 0, 3, 0, 3, 1, 3, 3, 0, 3, 2, 3, 0, 1, 0, 0, 3, 1, 0, 0, 1, 2, 1, 2, 1, 2, 2, 2, 2, 1, 2, 3, 2, 2, 2, 1, 2, 2, 1, 1, 0, 1, 2, 2, 2, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 3, 0, 3, 3, 0, 3, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 1, 2, 0, 1, 2, 1, 1, 1, 2, 2, 1, 2, 1, 0, 1, 1, 3, 0, 0, 0, 2, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 0, 1, 1, 2, 0, 0, 2, 0, 3, 0, 1, 0, 0, 0, 0, 1, 0, 0, 2, 2, 2, 0, 2, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 2, 3, 0, 1, 2, 1, 2, 2, 2, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 2, 0, 0, 0, 0,
    0, 1, 3, 0, 2, 2, 2, 0, 1, 2, 0, 2, 0, 2, 2, 2, 1, 1, 0, 1, 0, 0, 2, 0, 2, 1, 3, 2, 2, 2, 1, 2, 2, 3, 2, 2, 2, 2, 3, 0, 0, 1, 1, 3, 2, 2, 1, 0, 0, 1, 1, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 1, 1, 1, 3, 0, 1, 3, 1, 3, 2, 1, 0, 0, 0, 1, 0, 1, 0, 2, 1, 3, 0, 2, 2, 2, 1, 1, 1, 2, 2, 1, 2, 2, 1, 2, 1, 1, 2, 2, 2, 3, 3, 0, 2, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 1, 1, 1, 3, 1, 1, 2, 1, 3, 1, 0, 0, 0, 1, 0, 0, 1, 1, 2, 1, 2, 1, 2, 3, 2, 1, 1, 1, 2, 1, 3, 1, 2, 1, 2, 1, 2, 1, 1, 2, 2, 1, 0, 2, 1, 1, 0, 0, 1, 0, 0, 0, 2, 2, 1, 1, 0, 0, 0, 0,
    0, 3, 2, 3, 1, 3, 1, 3, 3, 0, 2, 2, 3, 0, 0, 0, 0, 0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 2, 2, 1, 2, 1, 1, 1, 0, 1, 1, 2, 1, 1, 0, 1, 2, 1, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 1, 3, 1, 3, 2, 1, 3, 0, 3, 0, 1, 0, 0, 1, 0, 1, 0, 0, 2, 2, 2, 0, 1, 2, 1, 1, 0, 2, 2, 1, 2, 0, 2, 1, 2, 0, 2, 0, 0, 1, 2, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 1, 3, 1, 1, 2, 3, 0, 0, 3, 1, 3, 0, 1, 0, 2, 0, 1, 0, 0, 1, 1, 1, 2, 0, 1, 3, 2, 2, 2, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 0, 1, 1, 2, 1, 1, 2, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 1, 2, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 2, 2, 3, 1, 1, 2, 0, 2, 2, 2, 0, 2, 3, 1, 3, 2, 3, 2, 1, 2, 2, 1, 0, 0, 1, 1, 2, 2, 2, 0, 0, 2, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 3, 2, 3, 2, 2, 1, 2, 0, 2, 1, 2, 3, 1, 1, 1, 3, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 2, 3, 3, 2, 0, 3, 2, 2, 3, 0, 3, 2, 1, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 0, 1, 3, 1, 1, 3, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 2, 0, 0, 3, 1, 0, 0, 0, 2, 0, 0, 2, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 2, 0, 1, 1, 3, 1, 0, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 1, 2, 1, 1, 1, 1, 1, 2, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 2, 1, 3, 3, 1, 2, 3, 3, 0, 2, 0, 0, 0, 0, 1, 0, 0, 2, 0, 2, 0, 2, 2, 2, 2, 1, 2, 2, 1, 2, 2, 1, 1, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1, 3, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 1, 1, 2, 2, 0, 1, 1, 1, 2, 1, 1, 1, 3, 2, 0, 1, 2, 0, 1, 3, 0, 1, 1, 1, 2, 2, 2, 1, 2, 2, 3, 2, 1, 1, 2, 1, 0, 0, 0, 0, 2, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 2, 3, 1, 2, 2, 1, 2, 2, 2, 0, 1, 1, 2, 0, 0, 1, 1, 1, 2, 2, 2, 0, 1, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 3, 3, 1, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1, 1, 2, 1, 2, 2, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 3, 1, 3, 3, 3, 0, 1, 1, 0, 2, 0, 3, 3, 1, 0, 3, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 2, 0, 3, 0, 0, 2, 1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 3, 0, 1, 2, 0, 1, 1, 1, 2, 1, 1, 1, 1, 1, 2, 0, 2, 0, 0, 1, 1, 1, 0, 1, 1, 2, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 0, 3, 0, 1, 0, 3, 0, 1, 2, 0, 3, 0, 0, 2, 0, 0, 1, 1, 0, 1, 1, 1, 2, 0, 1, 3, 2, 1, 0, 2, 2, 2, 3, 1, 1, 1, 2, 1, 1, 1, 1, 0, 1, 0, 0, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 0, 2, 0, 0, 2, 2, 0, 1, 2, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 2, 1, 0, 1, 2, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 2, 2, 1, 1, 2, 0, 1, 1, 1, 2, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 3, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 1, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 0, 1, 1, 2, 1, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 2, 0, 0, 1, 2, 0, 0, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 0, 0, 0, 2, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 2, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static CP037_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 40, 101, 102, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 107, 108, 109, 110, 111, 112, 113, 114, 51, 253, 253, 253, 253, 253, 253,
    253, 253, 115, 58, 116, 117, 118, 119, 120, 121, 253, 253, 253, 253, 253, 253,
    122, 123, 124, 125, 126, 127, 128, 129, 130, 253, 253, 253, 253, 253, 253, 253,
    131, 7, 16, 14, 9, 1, 17, 13, 11, 3, 253, 253, 132, 133, 134, 253,
    253, 50, 18, 8, 15, 2, 12, 19, 54, 5, 135, 136, 137, 253, 138, 253,
    139, 253, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 140, 141, 142, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 251, 143, 47, 144, 145, 146,
    253, 55, 35, 34, 37, 33, 38, 29, 53, 31, 252, 147, 23, 148, 149, 150,
    253, 253, 22, 28, 44, 42, 48, 52, 56, 41, 252, 151, 59, 152, 153, 154,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 155, 57, 156, 157, 251,
];

pub(crate) static CP037_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "German",
    char_to_order_map: &CP037_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 40, 101, 102, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 107, 108, 109, 110, 111, 112, 113, 114, 51, 253, 253, 253, 253, 253, 253,
    253, 253, 115, 58, 116, 117, 118, 119, 120, 121, 253, 253, 253, 253, 253, 253,
    122, 123, 124, 125, 126, 127, 128, 129, 130, 253, 253, 253, 253, 253, 253, 253,
    131, 7, 16, 14, 9, 1, 17, 13, 11, 3, 253, 253, 132, 133, 134, 253,
    253, 50, 18, 8, 15, 2, 12, 19, 54, 5, 135, 136, 137, 253, 138, 253,
    139, 253, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 140, 141, 142, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 251, 143, 47, 144, 145, 146,
    253, 55, 35, 34, 37, 33, 38, 29, 53, 31, 252, 147, 23, 148, 149, 150,
    253, 253, 22, 28, 44, 42, 48, 52, 56, 41, 252, 151, 59, 152, 153, 154,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 155, 57, 156, 157, 251,
];

pub(crate) static CP500_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "German",
    char_to_order_map: &CP500_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};

static CP850_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 55, 35, 34, 37, 33, 38,
    29, 53, 31, 22, 28, 44, 42, 48, 52, 56, 41, 253, 253, 253, 253, 253,
    253, 7, 16, 14, 9, 1, 17, 13, 11, 3, 50, 18, 8, 15, 2, 12,
    19, 54, 5, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 253, 253, 251,
    100, 23, 101, 102, 40, 103, 104, 105, 106, 107, 108, 109, 110, 111, 58, 112,
    113, 114, 115, 116, 47, 117, 118, 119, 120, 59, 57, 121, 253, 122, 253, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 132, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 135, 136, 253, 253, 253, 253, 253, 253, 253, 253,
    137, 138, 139, 140, 141, 142, 143, 144, 145, 253, 253, 253, 253, 253, 146, 253,
    147, 51, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP850_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP850",
    language: "German",
    char_to_order_map: &CP850_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};

static CP858_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 55, 35, 34, 37, 33, 38,
    29, 53, 31, 22, 28, 44, 42, 48, 52, 56, 41, 253, 253, 253, 253, 253,
    253, 7, 16, 14, 9, 1, 17, 13, 11, 3, 50, 18, 8, 15, 2, 12,
    19, 54, 5, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 253, 253, 251,
    100, 23, 101, 102, 40, 103, 104, 105, 106, 107, 108, 109, 110, 111, 58, 112,
    113, 114, 115, 116, 47, 117, 118, 119, 120, 59, 57, 121, 253, 122, 253, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 253, 253, 253, 252, 252, 253, 253, 253,
    253, 253, 253, 253, 253, 132, 133, 134, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 135, 136, 253, 253, 253, 253, 253, 253, 253, 253,
    137, 138, 139, 140, 141, 253, 142, 143, 144, 253, 253, 253, 253, 253, 145, 253,
    146, 51, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 253, 253,
    251, 253, 253, 252, 253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253,
];

pub(crate) static CP858_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP858",
    language: "German",
    char_to_order_map: &CP858_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_15_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 55, 35, 34, 37, 33, 38,
    29, 53, 31, 22, 28, 44, 42, 48, 52, 56, 41, 253, 253, 253, 253, 253,
    253, 7, 16, 14, 9, 1, 17, 13, 11, 3, 50, 18, 8, 15, 2, 12,
    19, 54, 5, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 100, 253, 101, 253, 102, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 103, 104, 253, 253, 105, 252, 106, 253, 107, 108, 109, 253,
    110, 111, 112, 113, 58, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124,
    125, 126, 127, 128, 129, 130, 59, 253, 131, 132, 133, 134, 57, 135, 136, 51,
    137, 138, 139, 140, 40, 141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151,
    152, 153, 154, 155, 156, 157, 47, 253, 158, 159, 160, 161, 23, 162, 163, 164,
];

pub(crate) static ISO_8859_15_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-15",
    language: "German",
    char_to_order_map: &ISO_8859_15_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};

static ISO_8859_1_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 55, 35, 34, 37, 33, 38,
    29, 53, 31, 22, 28, 44, 42, 48, 52, 56, 41, 253, 253, 253, 253, 253,
    253, 7, 16, 14, 9, 1, 17, 13, 11, 3, 50, 18, 8, 15, 2, 12,
    19, 54, 5, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 100, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 101, 253, 253, 253, 252, 102, 253, 252, 252, 252, 253,
    103, 104, 105, 106, 58, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117,
    118, 119, 120, 121, 122, 123, 59, 253, 124, 125, 126, 127, 57, 128, 129, 51,
    130, 131, 132, 133, 40, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144,
    145, 146, 147, 148, 149, 150, 47, 253, 151, 152, 153, 154, 23, 155, 156, 157,
];

pub(crate) static ISO_8859_1_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-1",
    language: "German",
    char_to_order_map: &ISO_8859_1_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};

static MACROMAN_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 55, 35, 34, 37, 33, 38,
    29, 53, 31, 22, 28, 44, 42, 48, 52, 56, 41, 253, 253, 253, 253, 253,
    253, 7, 16, 14, 9, 1, 17, 13, 11, 3, 50, 18, 8, 15, 2, 12,
    19, 54, 5, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 253, 253, 251,
    58, 100, 101, 102, 103, 59, 57, 104, 105, 106, 40, 107, 108, 109, 110, 111,
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 47, 122, 123, 124, 125, 23,
    253, 253, 253, 253, 253, 253, 253, 51, 253, 253, 253, 253, 253, 253, 126, 127,
    253, 253, 253, 253, 253, 128, 253, 253, 253, 129, 253, 130, 131, 132, 133, 134,
    253, 253, 253, 253, 135, 253, 253, 253, 253, 253, 253, 136, 137, 138, 139, 140,
    253, 253, 253, 253, 253, 253, 253, 253, 141, 142, 253, 253, 253, 253, 143, 144,
    253, 253, 253, 253, 253, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155,
    251, 156, 157, 158, 159, 160, 161, 253, 253, 253, 253, 253, 253, 253, 253, 162,
];

pub(crate) static MACROMAN_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacRoman",
    language: "German",
    char_to_order_map: &MACROMAN_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};

static WINDOWS_1252_GERMAN_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 24, 30, 43, 26, 27, 36, 45, 49, 32, 55, 35, 34, 37, 33, 38,
    29, 53, 31, 22, 28, 44, 42, 48, 52, 56, 41, 253, 253, 253, 253, 253,
    253, 7, 16, 14, 9, 1, 17, 13, 11, 3, 50, 18, 8, 15, 2, 12,
    19, 54, 5, 6, 4, 10, 25, 21, 46, 39, 20, 253, 253, 253, 253, 251,
    253, 255, 253, 100, 253, 253, 253, 253, 101, 253, 102, 253, 103, 255, 104, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 105, 253, 106, 255, 107, 108,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 109, 253, 253, 251, 253, 253,
    253, 253, 252, 252, 253, 110, 253, 253, 253, 252, 111, 253, 252, 252, 252, 253,
    112, 113, 114, 115, 58, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126,
    127, 128, 129, 130, 131, 132, 59, 253, 133, 134, 135, 136, 57, 137, 138, 51,
    139, 140, 141, 142, 40, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152, 153,
    154, 155, 156, 157, 158, 159, 47, 253, 160, 161, 162, 163, 23, 164, 165, 166,
];

pub(crate) static WINDOWS_1252_GERMAN_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1252",
    language: "German",
    char_to_order_map: &WINDOWS_1252_GERMAN_CHAR_TO_ORDER,
    language_model: &GERMAN_LANG_MODEL,
    typical_positive_ratio: 0.963225,
    keep_ascii_letters: true,
    reversed: false,
};
