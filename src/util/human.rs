use std::fmt::Write;


pub trait ToHuman {
    type Output<'a>  where Self: 'a;
    fn to_human<'a>(&'a self) -> Self::Output<'a>;
}

impl ToHuman for i64 {
    type Output<'a> = I64Human where Self: 'a;

    fn to_human<'a>(&'a self) -> Self::Output<'a> {
        I64Human(*self)
    }
}

impl ToHuman for usize {
    type Output<'a> = I64Human where Self: 'a;

    fn to_human<'a>(&'a self) -> Self::Output<'a> {
        I64Human(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

/// Integer with thousands separators, e.g. `100,000`.
pub struct I64Human(i64);
impl I64Human {
    fn fmt_me(&self, mut f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.sign_plus() && self.0 >= 0{
            f.write_char('+')?;
        }
        num_format::WriteFormatted::write_formatted(&mut f, &self.0, &num_format::Locale::en)
        .map_err(|_e| std::fmt::Error)?;
        Ok(())
    }
}

impl std::fmt::Display for I64Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_me(f)
    }
}

impl std::fmt::Debug for I64Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_me(f)
    }
}
