use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

/// Write a grid row by row, each element in brackets and right-aligned to
/// the widest element of its column.
///
/// The formatter's precision, if any, is forwarded to every element.
pub(crate) fn write_grid<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    nrows: usize,
    ncols: usize,
    at: impl Fn(usize, usize) -> T,
) -> fmt::Result {
    let precision = f.precision();

    let mut widths: Vec<usize> = vec![0; ncols];
    for (j, width) in widths.iter_mut().enumerate() {
        for i in 0..nrows {
            let w = WriteCounting::count(|wc| write_element(wc, &at(i, j), 0, precision));
            if w > *width {
                *width = w;
            }
        }
    }

    for i in 0..nrows {
        for (j, &width) in widths.iter().enumerate() {
            f.write_char('[')?;
            write_element(f, &at(i, j), width, precision)?;
            f.write_char(']')?;
        }
        if i + 1 < nrows {
            writeln!(f)?;
        }
    }
    Ok(())
}

fn write_element<W: fmt::Write, T: fmt::Display>(
    w: &mut W,
    value: &T,
    width: usize,
    precision: Option<usize>,
) -> fmt::Result {
    match precision {
        Some(p) => write!(w, "{:>width$.p$}", value, width = width, p = p),
        None => write!(w, "{:>width$}", value, width = width),
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
