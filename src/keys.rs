//! Keys on the Preonic
//!
//! The matrix is 5 rows of 12 columns.  A scan code is `row * COLS + col`, counting from the top
//! left.  The names below are the qwerty legends of the base layer, plus a few positions the
//! upper layers give meaning to.

/// Rows in the matrix.
pub const ROWS: usize = 5;

/// Columns in the matrix.
pub const COLS: usize = 12;

/// All of the scancodes fit within this.
pub const NKEYS: usize = ROWS * COLS;

/// The scan code of a matrix position.
pub const fn scan(row: usize, col: usize) -> u8 {
    (row * COLS + col) as u8
}

/// The matrix position of a scan code, if it is on the board.
pub fn position(code: u8) -> Option<(usize, usize)> {
    let code = code as usize;
    if code < NKEYS {
        Some((code / COLS, code % COLS))
    } else {
        None
    }
}

// Number row.
pub const KEY_GRAVE: u8 = scan(0, 0);
pub const KEY_1: u8 = scan(0, 1);
pub const KEY_BSPC: u8 = scan(0, 11);

// Top alpha row.
pub const KEY_TAB: u8 = scan(1, 0);
pub const KEY_Q: u8 = scan(1, 1);
pub const KEY_W: u8 = scan(1, 2);
pub const KEY_E: u8 = scan(1, 3);
pub const KEY_R: u8 = scan(1, 4);
pub const KEY_T: u8 = scan(1, 5);
pub const KEY_Y: u8 = scan(1, 6);
pub const KEY_U: u8 = scan(1, 7);
pub const KEY_I: u8 = scan(1, 8);

// Home row.
pub const KEY_ESC: u8 = scan(2, 0);
pub const KEY_A: u8 = scan(2, 1);
pub const KEY_S: u8 = scan(2, 2);
pub const KEY_D: u8 = scan(2, 3);
pub const KEY_F: u8 = scan(2, 4);
pub const KEY_G: u8 = scan(2, 5);
pub const KEY_H: u8 = scan(2, 6);
pub const KEY_J: u8 = scan(2, 7);
pub const KEY_K: u8 = scan(2, 8);

// Bottom alpha row.
pub const KEY_RSHIFT: u8 = scan(3, 0);
pub const KEY_Z: u8 = scan(3, 1);
pub const KEY_C: u8 = scan(3, 3);
pub const KEY_V: u8 = scan(3, 4);
pub const KEY_M: u8 = scan(3, 7);
pub const KEY_COMMA: u8 = scan(3, 8);
pub const KEY_DOT: u8 = scan(3, 9);
pub const KEY_ENTER: u8 = scan(3, 11);

// Thumb row.
pub const KEY_LSHIFT: u8 = scan(4, 0);
pub const KEY_LCTRL: u8 = scan(4, 1);
pub const KEY_LOWER: u8 = scan(4, 4);
pub const KEY_SPACE_L: u8 = scan(4, 5);
pub const KEY_SPACE_R: u8 = scan(4, 6);
pub const KEY_RAISE: u8 = scan(4, 7);
pub const KEY_MINUS: u8 = scan(4, 8);
pub const KEY_EQUAL: u8 = scan(4, 9);
pub const KEY_LBRC: u8 = scan(4, 10);
pub const KEY_RBRC: u8 = scan(4, 11);

// Raise layer.
pub const KEY_RA_CAPS: u8 = KEY_TAB;
pub const KEY_RA_ESHRUG: u8 = KEY_R;
pub const KEY_RA_SHRUG_FACE: u8 = KEY_T;
pub const KEY_RA_SHRUG: u8 = KEY_F;
pub const KEY_RA_SHRUG_HAND: u8 = KEY_G;

// Adjust layer.
pub const KEY_ADJ_AU_ON: u8 = KEY_D;
pub const KEY_ADJ_AU_OFF: u8 = KEY_F;
pub const KEY_ADJ_BL_STEP: u8 = KEY_K;
pub const KEY_ADJ_MU_ON: u8 = scan(3, 3);
pub const KEY_ADJ_ARROW: u8 = KEY_M;
pub const KEY_ADJ_QWERTY: u8 = KEY_COMMA;
pub const KEY_ADJ_NUMPAD: u8 = KEY_DOT;
pub const KEY_ADJ_RESET: u8 = KEY_SPACE_L;
