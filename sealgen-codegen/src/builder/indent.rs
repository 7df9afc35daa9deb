//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (C#).
    pub const CSHARP: Self = Self::Spaces(4);

    /// Append `levels` indentation units to `buf`.
    pub fn write_to(&self, buf: &mut String, levels: usize) {
        match self {
            Self::Spaces(width) => {
                let count = levels * usize::from(*width);
                buf.extend(std::iter::repeat_n(' ', count));
            }
            Self::Tab => buf.extend(std::iter::repeat_n('\t', levels)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(indent: Indent, levels: usize) -> String {
        let mut buf = String::new();
        indent.write_to(&mut buf, levels);
        buf
    }

    #[test]
    fn test_write_to() {
        assert_eq!(render(Indent::Spaces(2), 1), "  ");
        assert_eq!(render(Indent::Spaces(4), 2), "        ");
        assert_eq!(render(Indent::Tab, 3), "\t\t\t");
        assert_eq!(render(Indent::Spaces(4), 0), "");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::CSHARP);
        assert_eq!(Indent::CSHARP, Indent::Spaces(4));
    }
}
