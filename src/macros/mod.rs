/// Takes the owned value out of a `Cow`, or evaluates `$default` when the
/// `Cow` is borrowed.
///
/// Formatting helpers return `Cow::Borrowed` to say "input left unchanged",
/// in which case the caller already owns an equal string and can keep it
/// instead of copying the borrowed one.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
