//! Visibility and highlight helpers.

/// CSS class marking the highlighted scale segment.
pub const ACTIVE_CLASS: &str = "active";

/// Inline `display` values used to show and hide page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    /// Pick the display value for a shown/hidden flag.
    pub fn from_shown(shown: bool) -> Self {
        if shown { Display::Block } else { Display::None }
    }

    /// The CSS value written to `style.display`.
    pub fn css_value(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

/// Show or hide an element through its inline `display` style.
#[cfg(target_arch = "wasm32")]
pub fn set_shown(element: &web_sys::HtmlElement, shown: bool) -> crate::Result<()> {
    element
        .style()
        .set_property("display", Display::from_shown(shown).css_value())?;
    Ok(())
}

/// Add or remove the `active` class on an element.
#[cfg(target_arch = "wasm32")]
pub fn set_active(element: &web_sys::Element, active: bool) -> crate::Result<()> {
    let classes = element.class_list();
    if active {
        classes.add_1(ACTIVE_CLASS)?;
    } else {
        classes.remove_1(ACTIVE_CLASS)?;
    }
    Ok(())
}
