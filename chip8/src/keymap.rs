use sdl2::keyboard::Keycode;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// The pad layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: Keycode) -> Option<u8> {
    let layout = [
        [Keycode::Num1, Keycode::Num2, Keycode::Num3, Keycode::Num4],
        [Keycode::Q, Keycode::W, Keycode::E, Keycode::R],
        [Keycode::A, Keycode::S, Keycode::D, Keycode::F],
        [Keycode::Z, Keycode::X, Keycode::C, Keycode::V],
    ];
    let pad: [[u8; 4]; 4] = [
        [0x1, 0x2, 0x3, 0xC],
        [0x4, 0x5, 0x6, 0xD],
        [0x7, 0x8, 0x9, 0xE],
        [0xA, 0x0, 0xB, 0xF],
    ];
    layout
        .iter()
        .flatten()
        .zip(pad.iter().flatten())
        .find(|&(&host, _)| host == key)
        .map(|(_, &hex)| hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_corners() {
        assert_eq!(keymap(Keycode::Num1), Some(0x1));
        assert_eq!(keymap(Keycode::Num4), Some(0xC));
        assert_eq!(keymap(Keycode::Z), Some(0xA));
        assert_eq!(keymap(Keycode::V), Some(0xF));
    }

    #[test]
    fn test_maps_zero() {
        assert_eq!(keymap(Keycode::X), Some(0x0));
    }

    #[test]
    fn test_ignores_other_keys() {
        assert_eq!(keymap(Keycode::Space), None);
        assert_eq!(keymap(Keycode::Escape), None);
    }

    #[test]
    fn test_every_pad_key_is_reachable() {
        let mut seen = [false; 16];
        let host_keys = [
            Keycode::Num1,
            Keycode::Num2,
            Keycode::Num3,
            Keycode::Num4,
            Keycode::Q,
            Keycode::W,
            Keycode::E,
            Keycode::R,
            Keycode::A,
            Keycode::S,
            Keycode::D,
            Keycode::F,
            Keycode::Z,
            Keycode::X,
            Keycode::C,
            Keycode::V,
        ];
        for key in host_keys {
            seen[keymap(key).unwrap() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
