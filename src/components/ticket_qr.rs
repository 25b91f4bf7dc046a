use leptos::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

/// SVG markup of a QR code encoding `payload`.
pub fn qr_svg(payload: &str, size: u32) -> Result<String, String> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| format!("Failed to encode QR code: {}", e))?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(true)
        .build())
}

#[component]
pub fn TicketQr(#[prop(into)] payload: String) -> impl IntoView {
    match qr_svg(&payload, 200) {
        Ok(markup) => view! { <div class="ticket-qr" inner_html=markup></div> }.into_any(),
        Err(e) => view! { <span class="status-text status-error">{e}</span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_svg_for_booking_id() {
        let markup = qr_svg("1234", 200).unwrap();
        assert!(markup.contains("<svg"));
        assert!(markup.contains("</svg>"));
    }
}
