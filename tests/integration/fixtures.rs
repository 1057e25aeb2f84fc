//! Page fixtures shaped like the MS811 embedded web server

use printer_status::FetchSettings;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const STATUS_PATH: &str = "/cgi-bin/dynamic/printer/PrinterStatus.html";
pub const TOPBAR_PATH: &str = "/cgi-bin/dynamic/topbar.html";

/// Topbar frame with a product name and status line
pub fn topbar_page(model: &str, status_line: &str) -> String {
    format!(
        r##"<html><head><title>topbar</title></head><body>
<table width="100%"><tr>
  <td><span class="top_prodname">{}</span></td>
  <td class="statusLine"><font color="#000000">{}</font></td>
</tr></table>
</body></html>"##,
        model, status_line
    )
}

/// Status frame with one table per tray and a supplies table
pub fn status_page(trays: &[&str], toner_cell: &str) -> String {
    let tray_tables: String = trays
        .iter()
        .map(|level| {
            format!(
                r#"<table style="padding: .75pt"><tr><td><b>{}</b></td><td>Tamanho: A4</td></tr></table>"#,
                level
            )
        })
        .collect();

    format!(
        r#"<html><body>
<table class="status_table"><tr><td>Alertas</td></tr></table>
<table class="status_table"><tr><td>Papel</td></tr></table>
<table class="status_table"><tr><td>
{}
</td></tr></table>
<table class="status_table">
  <tr><td colspan="4"><b>Cartucho preto</b></td></tr>
  <tr><td colspan="4"><b>{}</b></td></tr>
  <tr><td>Kit de manutenção Vida restante:</td><td>80%</td></tr>
  <tr><td>Kit do rolo Vida restante:</td><td>75%</td></tr>
  <tr><td>Unid. imagem Vida restante:</td><td>61%</td></tr>
</table>
</body></html>"#,
        tray_tables, toner_cell
    )
}

/// Serves `template` for GET `route`
pub async fn serve(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Serves both pages with HTTP 200
pub async fn serve_printer(server: &MockServer, status: String, topbar: String) {
    serve(
        server,
        STATUS_PATH,
        ResponseTemplate::new(200).set_body_string(status),
    )
    .await;
    serve(
        server,
        TOPBAR_PATH,
        ResponseTemplate::new(200).set_body_string(topbar),
    )
    .await;
}

/// Fetch settings with a short timeout for tests
pub fn test_settings() -> FetchSettings {
    FetchSettings {
        worker_count: 2,
        request_timeout: Duration::from_millis(300),
        user_agent: "TestAgent/1.0".to_string(),
    }
}
