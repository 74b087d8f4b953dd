use std::collections::HashMap;
use std::fmt;

lazy_static! {
    /// однобуквенные обозначения классов в исходной таблице
    static ref TAGS: HashMap<&'static str, MathClass> =
        MathClass::ALL.iter().map(|&class| (class.tag(), class)).collect();
}

/// математический класс символа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MathClass
{
    /// цифры и символы, у которых есть только одна форма
    Normal,
    Alphabetic,
    Binary,
    /// обычно в паре с открывающим разделителем
    Closing,
    Diacritic,
    /// непарный разделитель (часто используется и как открывающий, и как закрывающий)
    Fence,
    /// часть большого оператора
    GlyphPart,
    /// n-арный или большой оператор, часто с пределами
    Large,
    /// обычно в паре с закрывающим разделителем
    Opening,
    Punctuation,
    /// включая стрелки
    Relation,
    Space,
    /// операторы, которые бывают только унарными
    Unary,
    /// операторы, унарные или бинарные в зависимости от контекста
    Vary,
    /// символы, не покрытые другими классами
    Special,
}

impl MathClass
{
    /// все классы в порядке объявления - в этом же порядке их перебирает классификатор
    pub const ALL: [MathClass; 15] = [
        MathClass::Normal,
        MathClass::Alphabetic,
        MathClass::Binary,
        MathClass::Closing,
        MathClass::Diacritic,
        MathClass::Fence,
        MathClass::GlyphPart,
        MathClass::Large,
        MathClass::Opening,
        MathClass::Punctuation,
        MathClass::Relation,
        MathClass::Space,
        MathClass::Unary,
        MathClass::Vary,
        MathClass::Special,
    ];

    /// класс по однобуквенному обозначению
    pub fn from_tag(tag: &str) -> Option<Self>
    {
        TAGS.get(tag).copied()
    }

    /// однобуквенное обозначение
    pub fn tag(&self) -> &'static str
    {
        match self {
            MathClass::Normal => "N",
            MathClass::Alphabetic => "A",
            MathClass::Binary => "B",
            MathClass::Closing => "C",
            MathClass::Diacritic => "D",
            MathClass::Fence => "F",
            MathClass::GlyphPart => "G",
            MathClass::Large => "L",
            MathClass::Opening => "O",
            MathClass::Punctuation => "P",
            MathClass::Relation => "R",
            MathClass::Space => "S",
            MathClass::Unary => "U",
            MathClass::Vary => "V",
            MathClass::Special => "X",
        }
    }

    /// название класса в заголовке исходной таблицы
    pub fn name(&self) -> &'static str
    {
        match self {
            MathClass::Normal => "Normal",
            MathClass::Alphabetic => "Alphabetic",
            MathClass::Binary => "Binary",
            MathClass::Closing => "Closing",
            MathClass::Diacritic => "Diacritic",
            MathClass::Fence => "Fence",
            MathClass::GlyphPart => "Glyph_Part",
            MathClass::Large => "Large",
            MathClass::Opening => "Opening",
            MathClass::Punctuation => "Punctuation",
            MathClass::Relation => "Relation",
            MathClass::Space => "Space",
            MathClass::Unary => "Unary",
            MathClass::Vary => "Vary",
            MathClass::Special => "Special",
        }
    }

    /// позиция в порядке объявления
    pub fn index(&self) -> usize
    {
        *self as usize
    }
}

impl fmt::Display for MathClass
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn tags_are_unique_and_resolve_back()
    {
        for (position, class) in MathClass::ALL.iter().enumerate() {
            assert_eq!(MathClass::from_tag(class.tag()), Some(*class));
            assert_eq!(class.index(), position);
        }

        assert_eq!(TAGS.len(), MathClass::ALL.len());
    }

    #[test]
    fn unknown_tags()
    {
        assert_eq!(MathClass::from_tag("Z"), None);
        assert_eq!(MathClass::from_tag("n"), None);
        assert_eq!(MathClass::from_tag(""), None);
        assert_eq!(MathClass::from_tag("NN"), None);
    }

    #[test]
    fn glyph_part_keeps_source_name()
    {
        assert_eq!(MathClass::GlyphPart.to_string(), "Glyph_Part");
        assert_eq!(MathClass::from_tag("G"), Some(MathClass::GlyphPart));
    }
}
