// Types generated from ui/app-window.slint
pub use crate::{
    FacetOption, HomeCardData, HomeSectionData, MarkerPin, Page, PlaceDetail, PlaceRow,
    StatusLevel, StatusMessage,
};
