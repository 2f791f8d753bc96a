//! The catalog of standard HTML tag names.
//!
//! Every tag in the catalog is a [`Tag`] variant and has a free constructor
//! function of the same lowercase name. A constructor is pure sugar:
//! `div()` builds exactly what `Element::new("div")` builds, without the
//! `Result`, since catalog names are valid by construction.
//!
//! ```ignore
//! use brick_dom::tags::{div, p};
//!
//! let page = div().attr("class_", "card")?.child(p().child("Hello"));
//! ```
//!
//! [`html`] builds a plain `<html>` element. Use [`crate::document`] for a
//! root that renders with `<!DOCTYPE html>`.

use strum_macros::{Display, EnumIter, EnumString};

use crate::node::Element;

macro_rules! tag_catalog {
    ($($variant:ident => $func:ident),* $(,)?) => {
        /// A standard HTML tag name.
        ///
        /// Parses from and displays as the lowercase tag name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
        #[strum(serialize_all = "lowercase")]
        pub enum Tag {
            $(
                #[doc = concat!("`<", stringify!($func), ">`")]
                $variant,
            )*
        }

        impl Tag {
            /// The lowercase tag name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($func),)*
                }
            }
        }

        $(
            #[doc = concat!("Create an empty `<", stringify!($func), ">` element.")]
            #[must_use]
            pub const fn $func() -> Element {
                Tag::$variant.element()
            }
        )*
    };
}

tag_catalog! {
    // Document metadata
    Html => html,
    Head => head,
    Title => title,
    Base => base,
    Link => link,
    Meta => meta,
    Style => style,
    Script => script,
    Noscript => noscript,
    Body => body,
    // Sections
    Article => article,
    Section => section,
    Nav => nav,
    Aside => aside,
    H1 => h1,
    H2 => h2,
    H3 => h3,
    H4 => h4,
    H5 => h5,
    H6 => h6,
    Hgroup => hgroup,
    Header => header,
    Footer => footer,
    Address => address,
    Main => main,
    // Grouping content
    P => p,
    Hr => hr,
    Pre => pre,
    Blockquote => blockquote,
    Ol => ol,
    Ul => ul,
    Li => li,
    Dl => dl,
    Dt => dt,
    Dd => dd,
    Figure => figure,
    Figcaption => figcaption,
    Div => div,
    // Text-level semantics
    A => a,
    Em => em,
    Strong => strong,
    Small => small,
    S => s,
    Cite => cite,
    Q => q,
    Dfn => dfn,
    Abbr => abbr,
    Data => data,
    Time => time,
    Code => code,
    Var => var,
    Samp => samp,
    Kbd => kbd,
    Sub => sub,
    Sup => sup,
    I => i,
    B => b,
    U => u,
    Mark => mark,
    Span => span,
    Br => br,
    Wbr => wbr,
    // Edits
    Ins => ins,
    Del => del,
    // Embedded content
    Picture => picture,
    Source => source,
    Img => img,
    Iframe => iframe,
    Embed => embed,
    Object => object,
    Video => video,
    Audio => audio,
    Track => track,
    Map => map,
    Area => area,
    Canvas => canvas,
    Svg => svg,
    // Tabular data
    Table => table,
    Caption => caption,
    Colgroup => colgroup,
    Col => col,
    Tbody => tbody,
    Thead => thead,
    Tfoot => tfoot,
    Tr => tr,
    Td => td,
    Th => th,
    // Forms
    Form => form,
    Label => label,
    Input => input,
    Button => button,
    Select => select,
    Datalist => datalist,
    Optgroup => optgroup,
    Option => option,
    Textarea => textarea,
    Output => output,
    Progress => progress,
    Meter => meter,
    Fieldset => fieldset,
    Legend => legend,
    // Interactive elements
    Details => details,
    Summary => summary,
    Dialog => dialog,
    // Scripting
    Template => template,
    Slot => slot,
}

impl Tag {
    /// Create an empty element for this tag.
    #[must_use]
    pub const fn element(self) -> Element {
        Element::from_tag(self.as_str())
    }
}
