pub fn format_distance_km(distance_km: f64) -> String {
    format!("{distance_km} km")
}

pub fn format_radius(radius_km: u32) -> String {
    format!("{radius_km:02}")
}
