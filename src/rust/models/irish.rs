// @generated by the offline table builder. Do not edit by hand.

use super::SingleByteModel;

static IRISH_LANG_MODEL: [u8; 4096] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3, 2, 0, 3, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 3, 2, 0, 3, 0, 2, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 1, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 1, 2, 3, 3, 0, 3, 3, 0, 2, 0, 0, 0, 0, 1, 1, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 3, 3, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 3, 3, 0, 0, 0, 0, 2, 1, 1, 0, 2, 0, 0, 0, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1, 3, 1, 1, 1, 1, 1, 1, 0, 1, 2, 1, 0, 1, 0, 1, 1, 1, 2, 1, 1, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 0, 3, 0, 1, 0, 1, 1, 1, 0, 2, 0, 1, 0, 0, 0, 0, 1, 0, 2, 0, 0, 2, 0, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 0, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 2, 0, 3, 0, 2, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 2, 0, 2, 3, 3, 1, 3, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 3, 3, 0, 2, 0, 2, 2, 2, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 2, 2, 3, 1, 3, 3, 1, 2, 3, 3, 3, 1, 3, 1, 1, 0, 3, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 2, 1, 0, 2, 1, 2, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 1, 3, 3, 3, 1, 3, 2, 3, 3, 3, 3, 0, 3, 1, 3, 3, 3, 0, 3, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 2, 1, 0, 2, 0, 1, 0, 3, 0, 0, 0, 3, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 2, 2, 3, 1, 2, 3, 2, 3, 0, 3, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 1, 2, 2, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 3, 1, 3, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 2, 0, 1, 0, 2, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 1, 3, 3, 1, 2, 3, 2, 3, 0, 3, 2, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 2, 0, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2, 3, 1, 2, 3, 0, 3, 3, 3, 1, 3, 3, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 3, 3, 3, 0, 3, 0, 2, 3, 3, 2, 0, 3, 2, 0, 3, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 1, 3, 1, 2, 2, 2, 2, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 3, 3, 3, 0, 3, 3, 3, 3, 3, 2, 0, 2, 0, 0, 1, 2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 3, 3, 3, 2, 3, 1, 3, 3, 3, 3, 3, 3, 3, 1, 2, 2, 0, 3, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 3, 2, 3, 1, 3, 2, 3, 0, 1, 3, 1, 2, 3, 2, 2, 2, 2, 2, 0, 2, 1, 0, 0, 0, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 0, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 1, 3, 2, 3, 3, 3, 2, 2, 2, 0, 3, 2, 3, 3, 0, 3, 3, 1, 1, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 2, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 3, 3, 0, 3, 3, 3, 3, 3, 2, 3, 2, 1, 3, 1, 3, 2, 0, 2, 3, 2, 2, 0, 3, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 3, 0, 3, 3, 3, 0, 2, 0, 3, 3, 3, 1, 1, 0, 0, 0, 3, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 0, 3, 3, 3, 2, 3, 2, 2, 2, 2, 2, 0, 3, 0, 2, 2, 2, 0, 2, 0, 1, 0, 3, 3, 3, 3, 3, 3, 3, 2, 2, 3, 2, 0, 0, 3, 1, 2, 2, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 3, 1, 3, 3, 3, 0, 2, 0, 2, 2, 3, 3, 0, 3, 1, 0, 1, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 0, 3, 0, 3, 0, 3, 1, 0, 0, 0, 3, 0, 2, 2, 0, 0, 2, 0, 2, 3, 2, 2, 2, 1, 2, 3, 2, 2, 2, 2, 2, 2, 3, 3, 2, 3, 0, 1, 0, 1, 0, 0, 3, 0, 1, 0, 1, 0, 0, 2, 2, 0, 1, 0, 0, 0, 0, 0, 2, 0,
    0, 3, 3, 3, 1, 3, 0, 3, 1, 3, 0, 3, 0, 0, 2, 0, 0, 3, 0, 0, 2, 0, 2, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 3, 2, 2, 3, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 2, 0, 1, 1, 1, 0, 2, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 0, 0, 0, 0, 3, 0, 2, 0, 0, 2, 0, 3, 0, 3, 2, 0, 0, 0, 0, 2, 2, 1, 3, 2, 3, 3, 2, 3, 2, 0, 2, 2, 1, 0, 2, 2, 1, 0, 0, 0, 3, 0, 2, 2, 0, 0, 0, 2, 0, 0, 0, 1, 2, 1, 0, 0, 0, 0, 0, 1, 0,
    0, 3, 3, 2, 1, 2, 0, 3, 3, 3, 3, 3, 0, 2, 2, 0, 2, 3, 0, 0, 2, 2, 2, 2, 2, 3, 3, 0, 2, 3, 1, 2, 2, 3, 1, 3, 2, 3, 2, 2, 1, 2, 0, 2, 1, 0, 2, 1, 1, 2, 2, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0,
    0, 3, 0, 0, 3, 3, 3, 0, 1, 3, 0, 2, 3, 2, 2, 0, 1, 0, 0, 1, 0, 0, 2, 2, 0, 3, 3, 3, 3, 1, 3, 3, 2, 3, 3, 3, 0, 1, 2, 3, 2, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 1, 0, 0,
    0, 3, 2, 3, 1, 0, 3, 3, 0, 2, 1, 0, 0, 0, 3, 0, 1, 2, 0, 0, 3, 0, 1, 2, 2, 2, 1, 1, 2, 3, 1, 2, 3, 2, 1, 3, 3, 3, 0, 2, 2, 0, 0, 1, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 0, 0, 3, 0, 3, 0, 0, 0, 0, 0, 0, 3, 2, 0, 0, 3, 0, 2, 3, 2, 2, 3, 1, 2, 3, 3, 2, 1, 3, 3, 2, 0, 3, 3, 1, 0, 0, 1, 1, 0, 3, 0, 1, 0, 0, 3, 1, 0, 0, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 0, 3, 0, 2, 0, 3, 0, 2, 0, 0, 2, 0, 1, 2, 0, 0, 0, 0, 0, 3, 0, 2, 2, 3, 2, 2, 2, 2, 2, 3, 2, 2, 2, 3, 2, 1, 2, 2, 0, 0, 1, 0, 1, 2, 0, 0, 0, 2, 0, 2, 2, 0, 2, 0, 0, 0, 1, 0, 0, 0,
    0, 1, 3, 0, 1, 2, 2, 0, 2, 0, 0, 2, 0, 1, 0, 2, 0, 0, 1, 2, 0, 2, 0, 1, 0, 2, 3, 3, 3, 3, 3, 3, 2, 1, 3, 2, 1, 0, 3, 2, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 0, 2, 0, 3, 0, 3, 0, 2, 0, 0, 1, 0, 2, 1, 0, 0, 3, 0, 1, 2, 1, 2, 2, 2, 2, 2, 1, 1, 2, 2, 1, 3, 3, 2, 1, 2, 1, 0, 0, 2, 0, 3, 0, 2, 0, 2, 2, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 3, 3, 0, 0, 1, 1, 3, 0, 3, 0, 0, 0, 0, 2, 0, 2, 3, 0, 0, 2, 0, 2, 3, 2, 2, 2, 1, 2, 2, 1, 2, 2, 3, 1, 2, 1, 2, 0, 2, 1, 1, 0, 2, 0, 1, 1, 0, 0, 0, 2, 0, 0, 0, 2, 0, 1, 0, 1, 2, 0, 0, 1, 0,
    0, 2, 2, 0, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 2, 0, 2, 0, 0, 0, 1, 0, 0, 3, 0, 3, 1, 2, 2, 3, 1, 3, 1, 3, 2, 2, 3, 3, 0, 2, 1, 0, 0, 2, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0, 2, 2, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 2, 0, 3, 1, 1, 0, 0, 2, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 3, 0, 2, 2, 1, 2, 2, 2, 2, 1, 3, 2, 2, 1, 2, 3, 2, 0, 0, 2, 1, 0, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 3, 2, 3, 2, 2, 0, 3, 0, 2, 0, 2, 2, 0, 1, 0, 0, 2, 0, 0, 0, 0, 2, 2, 0, 2, 1, 3, 1, 3, 2, 1, 2, 1, 2, 1, 3, 2, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 1, 0, 1, 0, 0,
    0, 3, 3, 2, 0, 3, 0, 2, 0, 3, 0, 2, 0, 0, 2, 0, 2, 2, 0, 0, 2, 0, 0, 2, 2, 2, 2, 0, 0, 2, 2, 2, 1, 3, 2, 2, 2, 2, 1, 3, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
    0, 3, 2, 3, 0, 3, 0, 2, 0, 3, 0, 2, 0, 0, 1, 0, 1, 3, 0, 0, 2, 0, 2, 2, 0, 0, 1, 0, 2, 2, 2, 2, 1, 2, 1, 2, 2, 1, 1, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 3, 0, 0, 0, 1, 3, 0, 1, 0, 0, 0, 1, 2, 0, 0, 0, 0, 1, 2, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 0, 0, 2, 3, 0, 2, 0, 1, 1, 0, 0, 0, 2, 2, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 2, 2, 1, 0, 0, 0, 0, 1, 2, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 2, 0, 3, 0, 2, 2, 3, 1, 3, 2, 1, 0, 2, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 0, 2, 3, 2, 1, 0, 0, 1, 1, 0, 1, 0, 2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 2, 0, 1, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 2, 1, 2, 1, 2, 1, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0,
    0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 2, 0, 2, 1, 1, 2, 1, 2, 0, 0, 1, 1, 2, 0, 1, 2, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0,
    0, 3, 2, 2, 2, 1, 2, 2, 0, 2, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 0, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 2, 1, 1, 2, 1, 2, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 2, 0, 3, 0, 3, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 2, 0, 2, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 2, 1, 1, 1, 2, 1, 0, 0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 2, 0, 0, 0, 1, 3, 0, 2, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 1, 0, 2, 0, 2, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 1, 0, 2, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 0, 0, 2, 0, 2, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 3, 0, 1, 0, 0, 2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 2, 0, 0, 1, 2, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

static ISO_8859_14_IRISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 40, 26, 34, 37, 39, 38, 36, 29, 57, 53, 35, 30, 27, 33,
    32, 61, 31, 28, 25, 43, 49, 51, 47, 62, 59, 253, 253, 253, 253, 253,
    253, 1, 18, 10, 12, 7, 19, 15, 3, 2, 52, 44, 11, 13, 4, 9,
    21, 60, 5, 6, 8, 17, 41, 48, 42, 46, 58, 253, 253, 253, 253, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 100, 101, 253, 102, 103, 104, 253, 105, 253, 106, 107, 108, 251, 253, 109,
    110, 111, 112, 113, 114, 115, 253, 116, 117, 118, 119, 120, 121, 122, 123, 124,
    125, 50, 126, 127, 128, 129, 130, 131, 132, 56, 133, 134, 135, 54, 136, 137,
    138, 139, 140, 55, 141, 142, 143, 144, 145, 146, 45, 147, 148, 149, 150, 151,
    152, 14, 153, 154, 155, 156, 157, 158, 159, 20, 160, 161, 162, 16, 163, 164,
    165, 166, 167, 24, 168, 169, 170, 171, 172, 173, 22, 174, 175, 176, 177, 178,
];

pub(crate) static ISO_8859_14_IRISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "ISO-8859-14",
    language: "Irish",
    char_to_order_map: &ISO_8859_14_IRISH_CHAR_TO_ORDER,
    language_model: &IRISH_LANG_MODEL,
    typical_positive_ratio: 0.964011,
    keep_ascii_letters: true,
    reversed: false,
};

static CP037_IRISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 14, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 20, 107, 108, 109, 16, 110, 111, 112, 113, 253, 253, 253, 253, 253, 253,
    253, 253, 114, 115, 116, 50, 117, 118, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 56, 122, 123, 124, 54, 125, 126, 127, 253, 253, 253, 253, 253, 253, 253,
    128, 1, 18, 10, 12, 7, 19, 15, 3, 2, 253, 253, 129, 130, 131, 253,
    253, 52, 44, 11, 13, 4, 9, 21, 60, 5, 132, 133, 134, 253, 135, 253,
    136, 253, 6, 8, 17, 41, 48, 42, 46, 58, 253, 253, 137, 138, 139, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 40, 26, 34, 37, 39, 38, 36, 29, 251, 140, 141, 142, 24, 143,
    253, 57, 53, 35, 30, 27, 33, 32, 61, 31, 252, 144, 145, 146, 22, 147,
    253, 253, 28, 25, 43, 49, 51, 47, 62, 59, 252, 148, 149, 150, 55, 151,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 152, 153, 154, 45, 251,
];

pub(crate) static CP037_IRISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP037",
    language: "Irish",
    char_to_order_map: &CP037_IRISH_CHAR_TO_ORDER,
    language_model: &IRISH_LANG_MODEL,
    typical_positive_ratio: 0.964011,
    keep_ascii_letters: true,
    reversed: false,
};

static CP500_IRISH_CHAR_TO_ORDER: [u8; 256] = [
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 254, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 254, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 251,
    253, 253, 100, 101, 102, 14, 103, 104, 105, 106, 253, 253, 253, 253, 253, 253,
    253, 20, 107, 108, 109, 16, 110, 111, 112, 113, 253, 253, 253, 253, 253, 253,
    253, 253, 114, 115, 116, 50, 117, 118, 119, 120, 253, 253, 253, 253, 253, 253,
    121, 56, 122, 123, 124, 54, 125, 126, 127, 253, 253, 253, 253, 253, 253, 253,
    128, 1, 18, 10, 12, 7, 19, 15, 3, 2, 253, 253, 129, 130, 131, 253,
    253, 52, 44, 11, 13, 4, 9, 21, 60, 5, 132, 133, 134, 253, 135, 253,
    136, 253, 6, 8, 17, 41, 48, 42, 46, 58, 253, 253, 137, 138, 139, 253,
    253, 253, 253, 253, 253, 253, 253, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 23, 40, 26, 34, 37, 39, 38, 36, 29, 251, 140, 141, 142, 24, 143,
    253, 57, 53, 35, 30, 27, 33, 32, 61, 31, 252, 144, 145, 146, 22, 147,
    253, 253, 28, 25, 43, 49, 51, 47, 62, 59, 252, 148, 149, 150, 55, 151,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 152, 153, 154, 45, 251,
];

pub(crate) static CP500_IRISH_MODEL: SingleByteModel = SingleByteModel {
    charset_name: "CP500",
    language: "Irish",
    char_to_order_map: &CP500_IRISH_CHAR_TO_ORDER,
    language_model: &IRISH_LANG_MODEL,
    typical_positive_ratio: 0.964011,
    keep_ascii_letters: true,
    reversed: false,
};
