//! Shared colors of the light "spectre" theme.

use crate::foundation::core::Rgb8;

/// Pale green paper every wallpaper is painted on.
pub const BACKGROUND: Rgb8 = Rgb8::new(224, 240, 224);

pub const INK_DEEP: Rgb8 = Rgb8::new(0, 45, 5);
pub const INK_HEAD: Rgb8 = Rgb8::new(0, 60, 0);
pub const INK_DARK: Rgb8 = Rgb8::new(0, 75, 20);
pub const INK: Rgb8 = Rgb8::new(0, 85, 18);
pub const INK_MID: Rgb8 = Rgb8::new(0, 95, 25);
pub const INK_LIGHT: Rgb8 = Rgb8::new(30, 130, 40);
pub const INK_PALE: Rgb8 = Rgb8::new(60, 160, 60);
pub const GLOW: Rgb8 = Rgb8::new(0, 150, 35);
pub const SCATTER: Rgb8 = Rgb8::new(40, 140, 40);

/// Katakana used by the rain streams.
pub const MATRIX_CHARS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ',
    'サ', 'シ', 'ス', 'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト',
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ',
    'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ',
    'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン',
];

pub const HEX_DIGITS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];
