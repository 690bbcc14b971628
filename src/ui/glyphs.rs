#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub bar_first: &'static str,
    pub bar_second: &'static str,
    pub focus_marker: &'static str,
    pub h_separator: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

pub fn ascii() -> Glyphs {
    Glyphs {
        bar_first: "#",
        bar_second: "=",
        focus_marker: ">",
        h_separator: "-",
    }
}

pub fn fancy() -> Glyphs {
    Glyphs {
        bar_first: "█",
        bar_second: "▓",
        focus_marker: "▶",
        h_separator: "─",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(select(false), ascii());
        assert_eq!(select(true), fancy());
        assert_ne!(ascii().bar_first, ascii().bar_second);
        assert_ne!(fancy().bar_first, fancy().bar_second);
    }
}
