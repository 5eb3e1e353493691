//! Sort engine
//!
//! Runs the attribute pass and then the `@apply` pass over a text, sorting
//! the classes of every span that holds static class content and copying
//! everything else through unchanged.

use crate::classes::{sort_class_list, PseudoOrder, RankIndex};
use crate::config::SortConfig;
use crate::matcher::{Span, SpanMatcher};

/// Sorts class strings with a fixed configuration
///
/// Building the rank index and compiling the span patterns happens once in
/// [`Sorter::new`]; [`Sorter::sort`] only reads from them.
#[derive(Debug, Clone)]
pub struct Sorter {
    index: RankIndex,
    pseudo_order: PseudoOrder,
    matcher: SpanMatcher,
}

impl Sorter {
    /// Create a sorter for `config`
    ///
    /// An invalid category setup is replaced by the built-ins, see
    /// [`SortConfig::resolved`].
    pub fn new(config: &SortConfig) -> Self {
        let config = config.resolved();
        let index = RankIndex::build(&config.categories, &config.category_order);
        tracing::debug!(prefixes = index.len(), "built rank index");

        Self {
            index,
            pseudo_order: PseudoOrder::new(config.pseudo_order),
            matcher: SpanMatcher::new(&config.custom_prefixes),
        }
    }

    /// Create a sorter from already built parts
    pub fn from_parts(index: RankIndex, pseudo_order: PseudoOrder, matcher: SpanMatcher) -> Self {
        Self {
            index,
            pseudo_order,
            matcher,
        }
    }

    pub fn index(&self) -> &RankIndex {
        &self.index
    }

    pub fn pseudo_order(&self) -> &PseudoOrder {
        &self.pseudo_order
    }

    pub fn matcher(&self) -> &SpanMatcher {
        &self.matcher
    }

    /// Sort every class span in `text`
    pub fn sort(&self, text: &str) -> String {
        sort_with(text, &self.index, &self.pseudo_order, &self.matcher)
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new(&SortConfig::default())
    }
}

/// Sort every class span in `text` using the default prefixes
///
/// Compiles the span patterns on each call; keep a [`Sorter`] around when
/// sorting more than one text.
pub fn sort(text: &str, index: &RankIndex, pseudo_order: &PseudoOrder) -> String {
    sort_with(text, index, pseudo_order, &SpanMatcher::default())
}

fn sort_with(
    text: &str,
    index: &RankIndex,
    pseudo_order: &PseudoOrder,
    matcher: &SpanMatcher,
) -> String {
    let spans = matcher.find_attribute_spans(text);
    let text = rewrite_spans(text, &spans, "attribute", index, pseudo_order, matcher);

    let spans = matcher.find_apply_spans(&text);
    rewrite_spans(&text, &spans, "apply", index, pseudo_order, matcher)
}

/// Copy `text`, replacing the content of each sortable span
fn rewrite_spans(
    text: &str,
    spans: &[Span],
    pass: &str,
    index: &RankIndex,
    pseudo_order: &PseudoOrder,
    matcher: &SpanMatcher,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut changed = 0usize;

    for span in spans {
        let content = span.content(text);
        out.push_str(&text[last..span.start]);

        if matcher.is_sortable(content) {
            let sorted = sort_class_list(content, index, pseudo_order);
            if sorted != content {
                changed += 1;
            }
            out.push_str(&sorted);
        } else {
            tracing::trace!(
                start = span.start,
                end = span.end,
                delimiter = ?span.delimiter,
                "span left unchanged"
            );
            out.push_str(content);
        }

        last = span.end;
    }
    out.push_str(&text[last..]);

    tracing::debug!(pass, spans = spans.len(), changed, "sort pass finished");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::classes::ClassToken;
    use crate::matcher::DynamicGuard;

    fn sorted(text: &str) -> String {
        Sorter::default().sort(text)
    }

    fn assert_sorts(unsorted: &str, expected: &str) {
        assert_eq!(sorted(unsorted), expected);
    }

    fn assert_unchanged(text: &str) {
        assert_eq!(sorted(text), text);
    }

    #[test]
    fn test_basic_examples() {
        assert_sorts(
            r#"<div class="text-white bg-blue-500">"#,
            r#"<div class="bg-blue-500 text-white">"#,
        );
        assert_sorts(
            r#"<div class="hover:opacity-100 not-hover:opacity-75 bg-black">"#,
            r#"<div class="bg-black hover:opacity-100 not-hover:opacity-75">"#,
        );
        assert_sorts(
            r#"<div class="flex-col carrot flex-1 banana flex apple">"#,
            r#"<div class="flex flex-col flex-1 carrot banana apple">"#,
        );
    }

    #[test]
    fn test_full_class_list() {
        assert_sorts(
            r#"<div class="font-semibold flex-1 flex-col gap-20 lg:bg-pink hover:bg-purple bg-gradient-to-r from-green-300 bg-black via-blue-500 to-purple-600 flex w-full font-sans items-center" blah blah"#,
            r#"<div class="flex flex-col flex-1 items-center gap-20 bg-black lg:bg-pink hover:bg-purple bg-gradient-to-r from-green-300 via-blue-500 to-purple-600 w-full font-sans font-semibold" blah blah"#,
        );
    }

    #[test]
    fn test_quote_styles() {
        assert_sorts(
            r#"<div className="flex-col flex"></div><div className='flex-col flex' blah blah"#,
            r#"<div className="flex flex-col"></div><div className='flex flex-col' blah blah"#,
        );
        assert_sorts(
            "<div className=''></div><div className='flex-col flex' blah blah",
            "<div className=''></div><div className='flex flex-col' blah blah",
        );
        assert_unchanged("<div className='flex' blah blah");
    }

    #[test]
    fn test_class_shapes() {
        assert_sorts(
            r#"<div className="top-0 left-10 left-0 lg:static fixed flex justify-center left-0""#,
            r#"<div className="top-0 left-0 left-0 left-10 lg:static fixed flex justify-center""#,
        );
        assert_sorts(
            "<div className='h-[calc(100%-1rem)] w-[100px] bg-[#1a1a1a]' blah blah",
            "<div className='bg-[#1a1a1a] w-[100px] h-[calc(100%-1rem)]' blah blah",
        );
        assert_sorts(
            r#"class="text-black bg-[url('image.jpg')]""#,
            r#"class="bg-[url('image.jpg')] text-black""#,
        );
        assert_sorts(
            "<div className='-mb-5 z-10 -mt-5' blah blah",
            "<div className='z-10 -mt-5 -mb-5' blah blah",
        );
        assert_sorts(
            r#"<div class="text-black bg-[var(--my-color)]"></div>"#,
            r#"<div class="bg-[var(--my-color)] text-black"></div>"#,
        );
    }

    #[test]
    fn test_framework_markup() {
        assert_sorts(
            r#"
    def card(assigns) do
      ~L"""
      <div class="text-white bg-blue-500">
        <.card_header {assigns} />
      </div>
      """
    end
    "#,
            r#"
    def card(assigns) do
      ~L"""
      <div class="bg-blue-500 text-white">
        <.card_header {assigns} />
      </div>
      """
    end
    "#,
        );
        assert_sorts(
            r#"<span class="text-white bg-blue-500" id="counter"><%= @counter %></span>"#,
            r#"<span class="bg-blue-500 text-white" id="counter"><%= @counter %></span>"#,
        );
        assert_sorts(
            r#"<button class="flex-row flex" on:click=on_click>"Welcome to Leptos!"</button>"#,
            r#"<button class="flex flex-row" on:click=on_click>"Welcome to Leptos!"</button>"#,
        );
        assert_sorts(
            r#"<button class="text-white bg-blue-500" onclick={ctx.link().callback(|_| Msg::Random)}>{ "Random" }</button>"#,
            r#"<button class="bg-blue-500 text-white" onclick={ctx.link().callback(|_| Msg::Random)}>{ "Random" }</button>"#,
        );
    }

    #[test]
    fn test_call_prefixes() {
        assert_sorts(
            "twMerge('hover:bg-dark-red bg-red', 'p-3 bg-[#B91C1C]')",
            "twMerge('bg-red hover:bg-dark-red', 'p-3 bg-[#B91C1C]')",
        );
        assert_sorts(
            "twMerge(`lg:grid-cols-[1fr,auto] grid-cols-2`)",
            "twMerge(`grid-cols-2 lg:grid-cols-[1fr,auto]`)",
        );
        assert_sorts(
            "<aside className={twMerge(' p-4     flex    ')}>",
            "<aside className={twMerge('flex p-4')}>",
        );
        assert_sorts(
            "<aside className={ twMerge(' p-4     flex    ')}>",
            "<aside className={ twMerge('flex p-4')}>",
        );
        assert_sorts(
            "container: twMerge(\n        \"lg:grid-cols-[1fr, auto] grid-cols-2\"\n      ),",
            "container: twMerge(\n        \"grid-cols-2 lg:grid-cols-[1fr, auto]\"\n      ),",
        );
        assert_sorts(
            "clsx('text-base           bg-blue-500     ')",
            "clsx('bg-blue-500 text-base')",
        );
        assert_sorts(
            "clsx('text-black bg-pink-500', [1 && 'bar', { baz:false, bat:null }, ['hello', ['world']]], 'cya')",
            "clsx('bg-pink-500 text-black', [1 && 'bar', { baz:false, bat:null }, ['hello', ['world']]], 'cya')",
        );
        assert_sorts(
            "cva('text-white bg-blue-500', { 'bg-blue-700 text-gray-100': isHovering })",
            "cva('bg-blue-500 text-white', { 'bg-blue-700 text-gray-100': isHovering })",
        );
    }

    #[test]
    fn test_multiline_call() {
        assert_sorts(
            r#"<span
        className={clsx(
          "py-1 px-2",
          {
            "bg-gray-100 text-gray-500": status === "pending",
          }
        )}
      ></span>"#,
            r#"<span
        className={clsx(
          "px-2 py-1",
          {
            "bg-gray-100 text-gray-500": status === "pending",
          }
        )}
      ></span>"#,
        );
    }

    #[test]
    fn test_custom_prefix() {
        let config = SortConfig {
            custom_prefixes: vec!["potato=".to_string()],
            ..SortConfig::default()
        };
        let sorter = Sorter::new(&config);

        assert_eq!(
            sorter.sort("<div potato='text-base bg-blue-500'>"),
            "<div potato='bg-blue-500 text-base'>"
        );
        // Default call prefixes are replaced, not extended
        assert_eq!(
            sorter.sort("clsx('text-base bg-blue-500')"),
            "clsx('text-base bg-blue-500')"
        );
    }

    #[test]
    fn test_dynamic_content_untouched() {
        assert_unchanged("<div class={`${isActive ? 'a' : 'b'}`}>");
        assert_unchanged(
            "<div class={`button ${isActive ? 'button-active' : 'button-inactive'}`}",
        );
        assert_unchanged(
            "<div className={`flex items-center gap-1.5 rounded-lg border-2 px-3 py-1.5 ${buttonClasses.DEFAULT}`}",
        );
        assert_unchanged(r#"<div :class="{ 'text-white': isActive, 'bg-blue-500': isActive }""#);
        assert_unchanged(r#"<div class="'bg-' + (isActive ? 'green' : 'red') + '-500'"></div>"#);
        assert_unchanged(
            r#"<div class="bg-blue {{ widget.size }}  case-video-container {{ widget.marginTop }} text-lg""#,
        );
        assert_unchanged(r#"<div data-htmx-class="bg-blue-500:text-white:bg-gray-300""#);
        assert_unchanged(r#"<div x-bind:class="basketItem.quantity  === 1 ? 'bg-slate-200' : ''""#);
        assert_unchanged(r#"<div class:isActive="bg-blue-400 text-white bg-blue-500""#);
        assert_unchanged(
            r#"<div class:isActive={isActive} class="bg-blue-400 text-white {isDisabled ? 'opacity-50' : ''}">"#,
        );
        assert_unchanged(
            r#"<button class="mt-5 px-4 py-2 <%= @button_color %> text-white rounded"></button>"#,
        );
        assert_unchanged(r#"<div class="<?php echo "bg-$color-500"; ?>">Hello, world!</div>"#);
        assert_unchanged(
            r#"<span class={if @counter > 5, do: "text-2xl text-red-500", else: "text-2xl"} id="counter">"#,
        );
        assert_unchanged(
            "<button {...props} className={twMerge(BTN_PRIMARY_CLASSNAMES, props.className)} />",
        );
        assert_unchanged("clsx({ foo:true }, { bar:false }, null, { '--foobar':'hello' })");
        assert_unchanged(r#"const cardBase = cva(["card", "border-solid", "rounded"], {})"#);
        assert_unchanged("cva({ 'bg-blue-700 text-gray-100': isHovering })");
    }

    #[test]
    fn test_apply_directives() {
        assert_sorts(
            ".btn {\n  @apply hover:bg-blue-700 bg-blue-500;\n}",
            ".btn {\n  @apply bg-blue-500 hover:bg-blue-700;\n}",
        );
        assert_sorts(
            ".btn {\nbutton{@apply hover:bg-blue-700 bg-blue-500;}\n}",
            ".btn {\nbutton{@apply bg-blue-500 hover:bg-blue-700;}\n}",
        );
        assert_sorts(
            "&__content {\n  @apply py-4 px-6 ;\n}",
            "&__content {\n  @apply px-6 py-4;\n}",
        );
        assert_sorts(
            "@apply flex-1 flex items-center;\n@apply text-white bg-black;\n@apply outline-none py-2;",
            "@apply flex flex-1 items-center;\n@apply bg-black text-white;\n@apply py-2 outline-none;",
        );
        assert_sorts(
            ".btn { @apply text-white !bg-blue-500; }",
            ".btn { @apply !bg-blue-500 text-white; }",
        );
        assert_sorts(
            ".btn { @apply text-[clamp(1rem,2vw,1.5rem)] bg-[rgb(0,0,0)]; }",
            ".btn { @apply bg-[rgb(0,0,0)] text-[clamp(1rem,2vw,1.5rem)]; }",
        );
    }

    #[test]
    fn test_apply_untouched() {
        assert_unchanged("<style jsx>{`.btn { @apply bg-${color} text-white; }`}</style>");
        assert_unchanged("<style>.btn { @apply bg-{{ color }} text-{{ textColor }}; }</style>");
        assert_unchanged("<style>.btn { @apply bg-<%= @color %> text-white; }</style>");
        assert_unchanged(".btn { @apply bg-#{$base-color}-#{$shade + 100} text-white; }");
        assert_unchanged(".btn { @apply bg-var(--color) text-white; }");
        assert_unchanged(".btn {\n  @apply bg-blue-500 /* comment */ text-white;\n}");
        assert_unchanged(
            ".btn {\n  @apply hover:bg-blue-700 bg-blue-500\n  border: 1px solid black;\n}",
        );
        assert_unchanged(
            ".btn {\n  @apply hover:bg-blue-700 \n  bg-blue-500\n  text-pink-500;\n}",
        );
    }

    #[test]
    fn test_attribute_then_apply() {
        assert_sorts(
            "<style lang=\"postcss\" class='text-white bg-black'>\n  .btn {\n    @apply py-2 px-4;\n  }\n</style>",
            "<style lang=\"postcss\" class='bg-black text-white'>\n  .btn {\n    @apply px-4 py-2;\n  }\n</style>",
        );
    }

    #[test]
    fn test_free_function_matches_sorter() {
        let text = "<div class=\"text-white bg-blue-500\"></div>\n.a { @apply py-2 px-4; }";
        let sorter = Sorter::default();
        assert_eq!(
            sort(text, sorter.index(), sorter.pseudo_order()),
            sorter.sort(text)
        );
    }

    #[test]
    fn test_from_parts() {
        let categories: BTreeMap<String, Vec<String>> = [
            ("layout", vec!["flex", "block"]),
            ("spacing", vec!["p-"]),
        ]
        .into_iter()
        .map(|(name, prefixes)| {
            let prefixes: Vec<String> = prefixes.into_iter().map(String::from).collect();
            (name.to_string(), prefixes)
        })
        .collect();
        let order = vec!["spacing".to_string(), "layout".to_string()];
        let index = RankIndex::build(&categories, &order);
        let pseudo_order: PseudoOrder = ["hover", "md"].into_iter().collect();
        let matcher =
            SpanMatcher::new(&["potato=".to_string()]).with_guard(DynamicGuard::empty());

        let sorter = Sorter::from_parts(index, pseudo_order, matcher);
        assert_eq!(sorter.index().len(), 3);
        assert_eq!(sorter.pseudo_order().entries(), &["hover", "md"]);
        assert!(sorter.matcher().guard().markers().is_empty());

        assert_eq!(
            sorter.sort("<div potato=\"flex md:p-2 p-4 hover:p-1\">"),
            "<div potato=\"p-4 hover:p-1 md:p-2 flex\">"
        );
        // Only the custom prefix and the built-in attributes are matched
        assert_eq!(sorter.sort("clsx('flex p-4')"), "clsx('flex p-4')");
        assert_eq!(sorter.sort("<a class=\"block p-4\">"), "<a class=\"p-4 block\">");

        // With no markers, interpolation that survives the literal scan is sorted
        assert_eq!(
            sorter.sort("<div potato=\"block $tone flex\">"),
            "<div potato=\"flex block $tone\">"
        );
        // `${` never reaches the guard, the literal scan stops at `{`
        assert_eq!(
            sorter.sort("<div potato=\"block ${tone} flex\">"),
            "<div potato=\"block ${tone} flex\">"
        );

        let guarded = Sorter::from_parts(
            sorter.index().clone(),
            sorter.pseudo_order().clone(),
            SpanMatcher::new(&["potato=".to_string()])
                .with_guard(DynamicGuard::empty().with_marker("$")),
        );
        assert_unchanged_by(&guarded, "<div potato=\"block $tone flex\">");
        assert_eq!(
            guarded.sort("<div potato=\"block flex\">"),
            "<div potato=\"flex block\">"
        );
    }

    fn assert_unchanged_by(sorter: &Sorter, text: &str) {
        assert_eq!(sorter.sort(text), text);
    }

    #[test]
    fn test_invalid_config_uses_defaults() {
        let mut config = SortConfig::default();
        config.category_order.pop();

        let sorter = Sorter::new(&config);
        assert_eq!(sorter.index().len(), Sorter::default().index().len());
        assert_eq!(
            sorter.sort("<a class=\"text-white bg-blue-500\">"),
            "<a class=\"bg-blue-500 text-white\">"
        );
    }

    const PROPERTY_INPUTS: &[&str] = &[
        "<div class=\"font-semibold flex-1 flex-col gap-20 lg:bg-pink hover:bg-purple flex w-full\">",
        "<div class=\"focus-within:ring-blue-200 group-hover:text-blue-500 focus-within:ring\">",
        "<i class=\"carrot z-10 banana -mt-5 apple not-hover:opacity-75 opacity-75 hover:opacity-50\">",
        "twMerge('top-0 left-10 left-0 lg:static fixed flex justify-center left-0')",
        ".x { @apply hover:bg-blue-700 text-white bg-blue-500 py-2 px-4; }",
    ];

    #[test]
    fn test_idempotent() {
        for input in PROPERTY_INPUTS {
            let once = sorted(input);
            assert_eq!(sorted(&once), once, "not idempotent for {input}");
        }
    }

    fn span_classes<'a>(sorter: &Sorter, text: &'a str) -> Vec<&'a str> {
        let matcher = sorter.matcher();
        let mut classes: Vec<&str> = matcher
            .find_attribute_spans(text)
            .into_iter()
            .chain(matcher.find_apply_spans(text))
            .flat_map(|span| span.content(text).split_whitespace())
            .collect();
        classes.sort_unstable();
        classes
    }

    #[test]
    fn test_classes_preserved() {
        let sorter = Sorter::default();
        for input in PROPERTY_INPUTS {
            let output = sorter.sort(input);
            assert_eq!(
                span_classes(&sorter, input),
                span_classes(&sorter, &output),
                "classes changed for {input}"
            );
        }
    }

    #[test]
    fn test_weights_never_decrease() {
        let sorter = Sorter::default();
        let output = sorter.sort(PROPERTY_INPUTS[2]);
        let content = output
            .trim_start_matches("<i class=\"")
            .trim_end_matches("\">");

        let tokens: Vec<ClassToken<'_>> = content
            .split_whitespace()
            .map(|raw| ClassToken::classify(raw, sorter.index()))
            .collect();
        let ranked: Vec<usize> = tokens.iter().filter_map(ClassToken::weight).collect();
        assert!(ranked.windows(2).all(|pair| pair[0] <= pair[1]));

        // Unranked classes trail in their original order
        let unranked: Vec<&str> = tokens
            .iter()
            .filter(|token| !token.is_ranked())
            .map(ClassToken::raw)
            .collect();
        assert_eq!(unranked, vec!["carrot", "banana", "apple"]);
        assert!(content.ends_with("carrot banana apple"));
    }

    #[test]
    fn test_sorter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sorter>();
    }
}
