mod details;
mod home;
mod listing;
mod panels;

pub(in crate::app) use details::ListingCard;
