/// Screen code of `ch` in the uppercase/graphics character set.
///
/// Letters of either case map to the uppercase glyphs; characters with no
/// glyph become `?`.
pub const fn screen_code(ch: char) -> u8 {
    match ch {
        '@' => 0,
        'A'..='Z' => ch as u8 - b'A' + 1,
        'a'..='z' => ch as u8 - b'a' + 1,
        '[' => 27,
        '£' => 28,
        ']' => 29,
        '↑' => 30,
        '←' => 31,
        ' '..='?' => ch as u8,
        _ => b'?',
    }
}
