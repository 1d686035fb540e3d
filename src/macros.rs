/// Lazily compiled, process-wide regex for fixed patterns used by the crate
/// itself. Rule patterns go through the builder instead, which reports errors.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a [`RuleSpec`](crate::RuleSpec).
///
/// ```
/// use flavorizer::{part_of_speech, rule};
///
/// let strip_y = rule! {
///     name: "ADJ -y -> -",
///     regexp: r"([^n])y\b" => ["$1"],
///     when: part_of_speech("adj."),
/// };
/// let letters = rule! {
///     name: "latin",
///     map: { "n" => "н", "o" => "о", "v" => "в" },
/// };
/// assert_eq!(strip_y.name(), "ADJ -y -> -");
/// assert!(letters.predicate().is_none());
/// ```
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        regexp: $pat:expr => [ $($tpl:expr),+ $(,)? ]
        $(, replace: $mode:expr)?
        $(, when: $pred:expr)?
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut primitive = $crate::regexp($pat, [ $($tpl),+ ]);
        $( primitive = primitive.with_replace_mode($mode); )?
        #[allow(unused_mut)]
        let mut spec = $crate::RuleSpec::new($name, primitive);
        $( spec = spec.when($pred); )?
        spec
    }};
    (
        name: $name:expr,
        map: { $($key:expr => $value:expr),+ $(,)? }
        $(, when: $pred:expr)?
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut spec = $crate::RuleSpec::new($name, $crate::map([ $(($key, $value)),+ ]));
        $( spec = spec.when($pred); )?
        spec
    }};
    (
        name: $name:expr,
        primitive: $primitive:expr
        $(, when: $pred:expr)?
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut spec = $crate::RuleSpec::new($name, $primitive);
        $( spec = spec.when($pred); )?
        spec
    }};
}
