use std::cmp::Ordering;

/// диапазон кодпоинтов BMP, границы включительно
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range16
{
    pub lo: u16,
    pub hi: u16,
}

/// диапазон, хотя бы одна граница которого не помещается в 16 бит
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range32
{
    pub lo: u32,
    pub hi: u32,
}

pub trait CodepointRange
{
    fn bounds(&self) -> (u32, u32);

    /// положение диапазона относительно кодпоинта - для бинарного поиска
    #[inline]
    fn locate(&self, code: u32) -> Ordering
    {
        let (lo, hi) = self.bounds();

        if hi < code {
            Ordering::Less
        } else if lo > code {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl CodepointRange for Range16
{
    #[inline]
    fn bounds(&self) -> (u32, u32)
    {
        (self.lo as u32, self.hi as u32)
    }
}

impl CodepointRange for Range32
{
    #[inline]
    fn bounds(&self) -> (u32, u32)
    {
        (self.lo, self.hi)
    }
}

/// есть ли кодпоинт в отсортированном списке непересекающихся диапазонов
#[inline]
pub fn search<R: CodepointRange>(ranges: &[R], code: u32) -> bool
{
    ranges.binary_search_by(|r| r.locate(code)).is_ok()
}
