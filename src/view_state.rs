//! Page view state: active section, mobile menu, scrolled nav bar and the
//! fullscreen image viewer.
//!
//! Everything here is target independent. The Yew client wraps [`ViewState`]
//! in a reducer and feeds it [`ViewAction`]s from DOM callbacks.

/// Vertical offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        SECTIONS
            .iter()
            .map(|section| section.id)
            .find(|id| id.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub label: &'static str,
    pub in_nav: bool,
}

/// Every anchorable section, in page order.
pub const SECTIONS: &[SectionDescriptor] = &[
    SectionDescriptor { id: SectionId::Home, label: "Home", in_nav: true },
    SectionDescriptor { id: SectionId::About, label: "About", in_nav: true },
    SectionDescriptor { id: SectionId::Education, label: "Education", in_nav: true },
    SectionDescriptor { id: SectionId::Experience, label: "Experience", in_nav: true },
    SectionDescriptor { id: SectionId::Skills, label: "Skills", in_nav: true },
    SectionDescriptor { id: SectionId::Projects, label: "Projects", in_nav: true },
    SectionDescriptor { id: SectionId::Certifications, label: "Certifications", in_nav: false },
    SectionDescriptor { id: SectionId::Contact, label: "Contact", in_nav: true },
];

pub fn nav_sections() -> impl Iterator<Item = &'static SectionDescriptor> {
    SECTIONS.iter().filter(|section| section.in_nav)
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullscreenImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    NavigateTo(SectionId),
    ToggleMenu,
    Scrolled(f64),
    OpenImage(FullscreenImage),
    CloseImage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: SectionId,
    pub menu_open: bool,
    pub scrolled: bool,
    pub fullscreen_image: Option<FullscreenImage>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            menu_open: false,
            scrolled: false,
            fullscreen_image: None,
        }
    }
}

impl ViewState {
    pub fn apply(mut self, action: ViewAction) -> Self {
        match action {
            ViewAction::NavigateTo(section) => {
                self.active_section = section;
                self.menu_open = false;
            }
            ViewAction::ToggleMenu => self.menu_open = !self.menu_open,
            ViewAction::Scrolled(offset) => self.scrolled = is_scrolled(offset),
            ViewAction::OpenImage(image) => self.fullscreen_image = Some(image),
            ViewAction::CloseImage => self.fullscreen_image = None,
        }
        self
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }
}

/// Binding between section ids and whatever renders them.
pub trait SectionScroller {
    /// Brings the section into view. Returns `false` when no element is bound
    /// to the section.
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

/// Scrolls to `section` and returns the state change to apply, or `None` when
/// the section is not currently rendered.
pub fn navigate_to(scroller: &impl SectionScroller, section: SectionId) -> Option<ViewAction> {
    scroller
        .scroll_into_view(section)
        .then_some(ViewAction::NavigateTo(section))
}

/// Same as [`navigate_to`] for an anchor name such as a location hash.
pub fn navigate_to_id(scroller: &impl SectionScroller, raw: &str) -> Option<ViewAction> {
    navigate_to(scroller, SectionId::parse(raw)?)
}

pub fn open_image(src: impl Into<String>, alt: impl Into<String>) -> ViewAction {
    ViewAction::OpenImage(FullscreenImage {
        src: src.into(),
        alt: alt.into(),
    })
}

pub fn close_image() -> ViewAction {
    ViewAction::CloseImage
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxTarget {
    Backdrop,
    Image,
    CloseButton,
}

/// Clicks on the enlarged image itself keep the viewer open.
pub fn lightbox_click(target: LightboxTarget) -> Option<ViewAction> {
    match target {
        LightboxTarget::Backdrop | LightboxTarget::CloseButton => Some(close_image()),
        LightboxTarget::Image => None,
    }
}
