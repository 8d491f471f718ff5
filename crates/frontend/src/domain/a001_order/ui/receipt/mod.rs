//! Печатный чек: HTML-документ в новом окне и вызов печати после паузы

use crate::shared::date_utils::format_day;
use crate::shared::number_format::format_rupees;
use contracts::domain::a001_order::receipt::Receipt;
use gloo_timers::callback::Timeout;

const RECEIPT_STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; color: #333; }
.receipt { max-width: 400px; margin: 0 auto; padding: 20px; border: 1px solid #ddd; }
.header { text-align: center; margin-bottom: 20px; border-bottom: 2px solid #b08d57; padding-bottom: 10px; }
.business-name { font-size: 24px; font-weight: bold; color: #b08d57; margin-bottom: 5px; }
.business-address { font-size: 14px; color: #666; margin-bottom: 5px; }
.customer-details { margin: 20px 0; padding: 15px; background: #f9f9f9; border: 1px solid #eee; border-radius: 5px; }
.customer-details p { margin: 8px 0; font-size: 14px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { padding: 10px; text-align: left; border: 1px solid #ddd; font-size: 14px; }
th { background: #f0f0f0; }
.total { text-align: right; font-weight: bold; padding: 15px; border-top: 2px solid #b08d57; font-size: 16px; }
.footer { text-align: center; margin-top: 30px; font-size: 12px; color: #666; border-top: 1px solid #eee; padding-top: 15px; }
.footer p { margin: 5px 0; }
"#;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Полный HTML-документ чека
pub fn render_receipt_html(receipt: &Receipt) -> String {
    let business = &receipt.business;
    let rows: String = receipt
        .lines
        .iter()
        .map(|line| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                html_escape(&line.item),
                line.quantity
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Order Receipt - {business_name}</title>
<style>{style}</style>
</head>
<body>
<div class="receipt">
<div class="header">
<div class="business-name">{business_name}</div>
<div class="business-address">{address}</div>
<div>Phone: {phone}</div>
</div>
<div class="customer-details">
<p><strong>Customer Name:</strong> {name}</p>
<p><strong>Mobile:</strong> {mobile}</p>
<p><strong>Village:</strong> {village}</p>
<p><strong>Date:</strong> {date}</p>
</div>
<table>
<thead><tr><th>Item</th><th>Quantity</th></tr></thead>
<tbody>{rows}</tbody>
</table>
<div class="total">Total Bill: {total}</div>
<div class="footer">
<p>Thank you for choosing {business_name}!</p>
<p>This is a computer generated receipt.</p>
</div>
</div>
</body>
</html>"#,
        business_name = html_escape(&business.name),
        style = RECEIPT_STYLE,
        address = html_escape(&business.address),
        phone = html_escape(&business.phone),
        name = html_escape(&receipt.customer_name),
        mobile = html_escape(&receipt.mobile),
        village = html_escape(&receipt.village),
        date = format_day(receipt.event_date),
        rows = rows,
        total = format_rupees(receipt.total_bill),
    )
}

/// Opens a new window with the receipt and prints it after `delay_ms`.
pub fn print_receipt(receipt: &Receipt, delay_ms: u32) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("window.open failed: {:?}", e))?
        .ok_or("the receipt window was blocked")?;
    let root = print_window
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or("the receipt window has no document")?;
    root.set_inner_html(&render_receipt_html(receipt));
    let _ = print_window.focus();

    log::info!("Printing receipt for order {}", receipt.order_id);
    Timeout::new(delay_ms, move || {
        if let Err(e) = print_window.print() {
            log::warn!("print() failed: {:?}", e);
        }
        let _ = print_window.close();
    })
    .forget();
    Ok(())
}
