// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static SLOVENE_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 1, 0, 1, 3, 1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 1, 1, 2, 0, 3, 2, 1, 1, 0, 3, 2, 2, 0, 1, 1, 0, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 1, 2, 0, 0, 1, 1, 3, 0, 0, 0, 1, 3, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 1, 0, 0, 0, 0, 3, 1, 1, 0, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 1, 3, 3, 3, 2, 3, 3, 3, 3, 2, 2, 3, 3, 2, 3, 3, 3, 2, 0, 1, 0, 0, 1, 2, 1, 1, 0, 0, 1, 3, 2, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 1, 2, 1, 0, 1, 1, 3, 1, 1, 0, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 0, 0, 1, 3, 2, 3, 1, 1, 0, 0, 1, 0, 0, 2, 2, 0, 0, 2, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 0, 2, 3, 2, 3, 0, 2, 3, 0, 3, 3, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 3, 0, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 2, 2, 2, 2, 0, 3, 0, 2, 2, 2, 3, 1, 0, 2, 1, 2, 2, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 3, 3, 1, 2, 2, 3, 2, 1, 1, 2, 3, 2, 3, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 2, 3, 3, 3, 3, 2, 2, 3, 3, 2, 3, 3, 3, 1, 1, 1, 0, 1, 1, 0, 3, 1, 0, 0, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 2, 2, 0, 1, 0, 3, 2, 1, 1, 2, 3, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 1, 2, 0, 1, 2, 0, 1, 0, 3, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2, 1, 3, 0, 3, 0, 3, 0, 2, 2, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 3, 2, 2, 2, 0, 3, 2, 3, 0, 3, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 1, 3, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 2, 2, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 2, 2, 3, 2, 3, 1, 1, 3, 0, 1, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 0, 2, 2, 2, 2, 3, 2, 1, 2, 2, 2, 2, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 1, 2, 0, 2, 2, 3, 1, 2, 2, 2, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 1, 3, 0, 3, 2, 2, 2, 0, 2, 1, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 2, 3, 2, 2, 2, 2, 1, 2, 0, 3, 0, 1, 1, 0, 2, 3, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 2, 3, 1, 2, 2, 1, 0, 2, 0, 2, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 1, 3, 3, 3, 3, 0, 2, 2, 2, 0, 0, 1, 2, 0, 2, 0, 3, 0, 2, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 0, 3, 0, 0, 1, 2, 2, 1, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 2, 2, 2, 3, 2, 3, 0, 2, 2, 3, 3, 1, 2, 2, 0, 2, 0, 2, 1, 2, 2, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 3, 2, 2, 2, 2, 0, 2, 0, 2, 0, 3, 3, 0, 0, 1, 1, 1, 2, 0, 3, 3, 2, 2, 2, 2, 0, 2, 3, 1, 3, 1, 3, 3, 3, 3, 2, 1, 2, 2, 2, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 2, 0, 2, 3, 2, 2, 1, 3, 3, 2, 2, 0, 2, 2, 2, 0, 2, 1, 0, 2, 0, 3, 2, 2, 1, 3, 0, 0, 3, 2, 0, 3, 2, 3, 3, 3, 3, 2, 2, 2, 2, 2, 1, 2, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 3, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 2, 3, 0, 2, 2, 3, 2, 0, 2, 2, 1, 2, 1, 2, 1, 2, 2, 3, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 2, 2, 2, 2, 2, 2, 1, 3, 3, 0, 3, 2, 0, 0, 3, 2, 1, 1, 2, 3, 2, 0, 1, 3, 2, 0, 3, 3, 0, 3, 2, 2, 3, 2, 3, 2, 0, 2, 2, 2, 2, 1, 1, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 0, 0, 0, 1, 0, 2, 1, 0, 2, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 1, 2, 3, 1, 3, 2, 3, 3, 0, 0, 2, 2, 3, 0, 0, 0, 0, 2, 2, 1, 2, 3, 1, 3, 2, 0, 2, 1, 3, 2, 0, 2, 2, 0, 2, 2, 2, 2, 2, 2, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 1, 3, 0, 0, 0, 3, 1, 0, 1, 2, 0, 0, 2, 0, 1, 0, 0, 0, 1, 3, 2, 2, 3, 2, 2, 2, 2, 2, 2, 2, 0, 1, 2, 0, 2, 2, 1, 2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 1, 1, 0, 3, 2, 2, 2, 2, 1, 2, 0, 2, 0, 2, 0, 1, 0, 0, 2, 0, 0, 0, 3, 2, 1, 2, 2, 2, 0, 2, 3, 1, 2, 1, 3, 3, 2, 3, 3, 1, 1, 2, 3, 2, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 2, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 2, 1, 3, 3, 2, 3, 0, 2, 1, 3, 2, 0, 1, 2, 0, 2, 2, 2, 1, 3, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 1, 3, 3, 2, 0, 0, 2, 1, 2, 0, 1, 0, 3, 0, 1, 2, 1, 2, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 2, 3, 1, 0, 1, 0, 2, 0, 2, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 2, 3, 1, 3, 0, 2, 2, 3, 2, 0, 0, 1, 0, 2, 0, 2, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 0, 1, 0, 2, 0, 0, 1, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 1, 1, 1, 2, 3, 3, 2, 2, 0, 2, 2, 3, 1, 0, 0, 2, 0, 2, 1, 1, 2, 0, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 1, 0, 2, 0, 0, 0, 0, 3, 2, 0, 2, 0, 2, 1, 1, 0, 2, 2, 0, 0, 0, 3, 0, 2, 3, 0, 3, 0, 0, 2, 2, 3, 0, 2, 2, 0, 0, 2, 1, 3, 2, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 0, 1, 1, 0, 0, 1, 1, 0, 0, 2, 0, 1, 2, 0, 0, 1, 0, 0, 0, 2, 2, 3, 2, 2, 3, 0, 2, 2, 2, 1, 1, 1, 1, 2, 2, 1, 2, 1, 1, 2, 2, 3, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 3, 2, 2, 3, 1, 3, 2, 1, 2, 2, 0, 0, 2, 2, 2, 1, 0, 1, 0, 0, 2, 2, 1, 3, 2, 1, 2, 0, 1, 2, 3, 2, 0, 2, 0, 2, 2, 0, 0, 1, 1, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 2, 2, 2, 3, 2, 1, 1, 3, 1, 1, 1, 1, 1, 0, 2, 1, 0, 0, 0, 2, 2, 2, 0, 3, 1, 0, 2, 0, 0, 3, 0, 3, 3, 0, 2, 0, 0, 0, 1, 1, 2, 0, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 3, 0, 3, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 3, 0, 1, 0, 0, 0, 0, 2, 0, 3, 2, 1, 2, 0, 2, 1, 2, 0, 0, 0, 2, 0, 2, 1, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 1, 2, 2, 1, 0, 2, 2, 0, 2, 1, 0, 1, 2, 0, 0, 1, 0, 1, 1, 3, 2, 3, 2, 2, 2, 0, 2, 2, 2, 2, 0, 0, 2, 0, 2, 1, 2, 2, 0, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 3, 0, 2, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 2, 1, 2, 3, 2, 2, 2, 0, 2, 2, 2, 2, 1, 2, 2, 0, 2, 0, 1, 0, 1, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 3, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 2, 2, 0, 1, 1, 1, 1, 1, 0, 2, 0, 2, 0, 1, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 2, 2, 2, 0, 2, 0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 2, 2, 2, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 2, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 2, 1, 2, 2, 0, 1, 2, 2, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 2, 2, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 3, 1, 0, 1, 3, 0, 1, 2, 1, 2, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
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

static CP852_SLOVENE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 42, 44, 32, 33, 45, 43, 47, 26, 46, 36, 39, 37, 24, 29,
    25, 100, 34, 31, 28, 41, 40, 101, 102, 103, 38, 253, 253, 253, 253, 253,
    253, 1, 19, 22, 13, 2, 35, 20, 23, 3, 14, 9, 11, 15, 5, 4,
    12, 104, 6, 8, 7, 17, 10, 105, 106, 107, 16, 253, 253, 253, 253, 251,
    108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123,
    124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 253, 18,
    138, 139, 140, 141, 142, 143, 50, 30, 144, 145, 253, 146, 48, 147, 253, 253,
    253, 253, 253, 253, 253, 148, 149, 150, 151, 253, 253, 253, 253, 152, 153, 253,
    253, 253, 253, 253, 253, 253, 154, 155, 253, 253, 253, 253, 253, 253, 253, 253,
    156, 157, 158, 159, 160, 161, 162, 163, 164, 253, 253, 253, 253, 165, 166, 253,
    167, 168, 169, 170, 171, 172, 49, 21, 173, 174, 175, 176, 177, 178, 179, 253,
    251, 253, 253, 180, 253, 253, 253, 253, 253, 253, 253, 181, 182, 183, 253, 253,
];

pub(crate) static CP852_SLOVENE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP852",
    language: "Slovene",
    char_to_order_map: &CP852_SLOVENE_CHAR_TO_ORDER,
    language_model: &SLOVENE_LANG_MODEL,
    typical_positive_ratio: 0.974930,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_16_SLOVENE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 42, 44, 32, 33, 45, 43, 47, 26, 46, 36, 39, 37, 24, 29,
    25, 100, 34, 31, 28, 41, 40, 101, 102, 103, 38, 253, 253, 253, 253, 253,
    253, 1, 19, 22, 13, 2, 35, 20, 23, 3, 14, 9, 11, 15, 5, 4,
    12, 104, 6, 8, 7, 17, 10, 105, 106, 107, 16, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 108, 109, 110, 253, 253, 49, 253, 21, 253, 111, 253, 112, 251, 113, 114,
    253, 253, 48, 115, 50, 253, 253, 253, 30, 18, 116, 253, 117, 118, 119, 120,
    121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136,
    137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152,
    153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 166, 167, 168,
    169, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179, 180, 181, 182, 183, 184,
];

pub(crate) static ISO_8859_16_SLOVENE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-16",
    language: "Slovene",
    char_to_order_map: &ISO_8859_16_SLOVENE_CHAR_TO_ORDER,
    language_model: &SLOVENE_LANG_MODEL,
    typical_positive_ratio: 0.974930,
    keep_ascii_letters: false,
    reversed: false,
};

static ISO_8859_2_SLOVENE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 42, 44, 32, 33, 45, 43, 47, 26, 46, 36, 39, 37, 24, 29,
    25, 100, 34, 31, 28, 41, 40, 101, 102, 103, 38, 253, 253, 253, 253, 253,
    253, 1, 19, 22, 13, 2, 35, 20, 23, 3, 14, 9, 11, 15, 5, 4,
    12, 104, 6, 8, 7, 17, 10, 105, 106, 107, 16, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 108, 253, 109, 253, 110, 111, 253, 253, 49, 112, 113, 114, 251, 50, 115,
    253, 116, 253, 117, 253, 118, 119, 120, 253, 21, 121, 122, 123, 253, 30, 124,
    125, 126, 127, 128, 129, 130, 131, 132, 48, 133, 134, 135, 136, 137, 138, 139,
    140, 141, 142, 143, 144, 145, 146, 253, 147, 148, 149, 150, 151, 152, 153, 154,
    155, 156, 157, 158, 159, 160, 161, 162, 18, 163, 164, 165, 166, 167, 168, 169,
    170, 171, 172, 173, 174, 175, 176, 253, 177, 178, 179, 180, 181, 182, 183, 253,
];

pub(crate) static ISO_8859_2_SLOVENE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-2",
    language: "Slovene",
    char_to_order_map: &ISO_8859_2_SLOVENE_CHAR_TO_ORDER,
    language_model: &SLOVENE_LANG_MODEL,
    typical_positive_ratio: 0.974930,
    keep_ascii_letters: false,
    reversed: false,
};

static MACLATIN2_SLOVENE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 42, 44, 32, 33, 45, 43, 47, 26, 46, 36, 39, 37, 24, 29,
    25, 100, 34, 31, 28, 41, 40, 101, 102, 103, 38, 253, 253, 253, 253, 253,
    253, 1, 19, 22, 13, 2, 35, 20, 23, 3, 14, 9, 11, 15, 5, 4,
    12, 104, 6, 8, 7, 17, 10, 105, 106, 107, 16, 253, 253, 253, 253, 251,
    108, 109, 110, 111, 112, 113, 114, 115, 116, 48, 117, 18, 118, 119, 120, 121,
    122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135, 136, 137,
    253, 253, 138, 253, 253, 253, 253, 139, 253, 253, 253, 140, 253, 253, 141, 142,
    143, 144, 253, 253, 145, 146, 253, 253, 147, 148, 149, 150, 151, 152, 153, 154,
    155, 156, 253, 253, 157, 158, 253, 253, 253, 253, 253, 159, 160, 161, 162, 163,
    253, 253, 253, 253, 253, 253, 253, 253, 164, 165, 166, 167, 253, 253, 168, 169,
    170, 49, 253, 253, 21, 171, 172, 173, 174, 175, 176, 50, 30, 177, 178, 179,
    180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, 192, 193, 194, 195,
];

pub(crate) static MACLATIN2_SLOVENE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "MacLatin2",
    language: "Slovene",
    char_to_order_map: &MACLATIN2_SLOVENE_CHAR_TO_ORDER,
    language_model: &SLOVENE_LANG_MODEL,
    typical_positive_ratio: 0.974930,
    keep_ascii_letters: false,
    reversed: false,
};

static WINDOWS_1250_SLOVENE_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 27, 42, 44, 32, 33, 45, 43, 47, 26, 46, 36, 39, 37, 24, 29,
    25, 100, 34, 31, 28, 41, 40, 101, 102, 103, 38, 253, 253, 253, 253, 253,
    253, 1, 19, 22, 13, 2, 35, 20, 23, 3, 14, 9, 11, 15, 5, 4,
    12, 104, 6, 8, 7, 17, 10, 105, 106, 107, 16, 253, 253, 253, 253, 251,
    253, 255, 253, 255, 253, 253, 253, 253, 255, 253, 49, 253, 108, 109, 50, 110,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 21, 253, 111, 112, 30, 113,
    253, 114, 253, 115, 253, 116, 253, 253, 253, 253, 117, 253, 253, 251, 253, 118,
    253, 253, 253, 119, 253, 120, 253, 253, 253, 121, 122, 253, 123, 253, 124, 125,
    126, 127, 128, 129, 130, 131, 132, 133, 48, 134, 135, 136, 137, 138, 139, 140,
    141, 142, 143, 144, 145, 146, 147, 253, 148, 149, 150, 151, 152, 153, 154, 155,
    156, 157, 158, 159, 160, 161, 162, 163, 18, 164, 165, 166, 167, 168, 169, 170,
    171, 172, 173, 174, 175, 176, 177, 253, 178, 179, 180, 181, 182, 183, 184, 253,
];

pub(crate) static WINDOWS_1250_SLOVENE_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "Windows-1250",
    language: "Slovene",
    char_to_order_map: &WINDOWS_1250_SLOVENE_CHAR_TO_ORDER,
    language_model: &SLOVENE_LANG_MODEL,
    typical_positive_ratio: 0.974930,
    keep_ascii_letters: false,
    reversed: false,
};
