//! Server-rendered HTML pages.
//!
//! The pages are small enough to build with `format!`. Every value that
//! came from a visitor or from the database goes through [`escape_html`] (or
//! [`encode_query_value`] inside links) before it is written out.

use std::fmt::Write;

use agency_core::pagination::PageInfo;
use agency_db::models::contact::Contact;

/// Characters of a message shown in the admin table before truncation.
pub const MESSAGE_PREVIEW_CHARS: usize = 100;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#0a0a0a;color:#eee}\
main{max-width:960px;margin:0 auto;padding:32px 16px}\
a{color:#4ecdc4}\
form.contact{display:grid;gap:12px;max-width:480px}\
input,textarea,button{font:inherit;padding:10px;border-radius:6px;border:1px solid #333}\
button{background:#4ecdc4;color:#0a0a0a;border:0;cursor:pointer}\
table{width:100%;border-collapse:collapse;font-size:14px}\
th,td{border-bottom:1px solid #333;padding:6px;text-align:left;vertical-align:top}\
.notice{margin-top:12px}.notice.error{color:#ff6b6b}.notice.success{color:#4ecdc4}";

const CONTACT_FORM_SCRIPT: &str = r#"
document.getElementById('contact-form').addEventListener('submit', async function (e) {
    e.preventDefault();
    const form = e.target;
    const notice = document.getElementById('form-notice');
    const data = Object.fromEntries(new FormData(form).entries());
    try {
        const response = await fetch('/contact', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(data),
        });
        const result = await response.json();
        if (!response.ok) throw new Error(result.detail || 'Ошибка сервера');
        notice.className = 'notice success';
        notice.textContent = result.message;
        form.reset();
    } catch (error) {
        notice.className = 'notice error';
        notice.textContent = error.message;
    }
});
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a query string value (RFC 3986 unreserved set kept).
pub fn encode_query_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// First [`MESSAGE_PREVIEW_CHARS`] characters of `message`, with an ellipsis
/// when something was cut.
pub fn message_preview(message: &str) -> String {
    let mut chars = message.chars();
    let preview: String = chars.by_ref().take(MESSAGE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{preview}…")
    } else {
        preview
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// Landing page with the contact form.
pub fn landing() -> String {
    let body = format!(
        "<h1>Event Agency</h1>\n\
         <p>Организуем мероприятия любого масштаба. Оставьте заявку, и мы свяжемся с вами.</p>\n\
         <form id=\"contact-form\" class=\"contact\">\n\
         <input name=\"name\" placeholder=\"Ваше имя\" required maxlength=\"100\">\n\
         <input name=\"email\" type=\"email\" placeholder=\"Email\" required>\n\
         <input name=\"phone\" type=\"tel\" placeholder=\"Телефон\">\n\
         <textarea name=\"message\" rows=\"5\" placeholder=\"Сообщение\" required maxlength=\"1000\"></textarea>\n\
         <button type=\"submit\">Отправить</button>\n\
         </form>\n\
         <div id=\"form-notice\" class=\"notice\" role=\"status\"></div>\n\
         <script>{CONTACT_FORM_SCRIPT}</script>"
    );
    layout("Event Agency", &body)
}

/// Admin entry page. Following the link triggers the browser's Basic-auth
/// prompt.
pub fn admin_login() -> String {
    layout(
        "Вход в админ-панель",
        "<h1>Админ-панель</h1>\n\
         <p>Для просмотра заявок потребуется логин и пароль администратора.</p>\n\
         <p><a href=\"/admin/contacts\">Перейти к заявкам</a></p>",
    )
}

fn list_url(page: i64, search: Option<&str>) -> String {
    match search {
        Some(term) => format!(
            "/admin/contacts?page={page}&amp;search={}",
            encode_query_value(term)
        ),
        None => format!("/admin/contacts?page={page}"),
    }
}

/// Admin listing: search box, one page of contacts, and pager links.
pub fn contact_list(contacts: &[Contact], info: &PageInfo, search: Option<&str>) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        "<h1>Заявки</h1>\n\
         <form method=\"get\" action=\"/admin/contacts\">\n\
         <input name=\"search\" value=\"{}\" placeholder=\"Имя, email или телефон\">\n\
         <button type=\"submit\">Найти</button>\n\
         </form>\n\
         <p>Всего: {}. Страница {} из {}.</p>\n",
        escape_html(search.unwrap_or_default()),
        info.total_count,
        info.page,
        info.total_pages,
    );

    if contacts.is_empty() {
        body.push_str("<p>Заявок не найдено.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>ID</th><th>Имя</th><th>Email</th><th>Телефон</th>\
             <th>Сообщение</th><th>Дата</th><th>IP</th></tr></thead>\n<tbody>\n",
        );
        for contact in contacts {
            let _ = writeln!(
                body,
                "<tr data-id=\"{id}\"><td>{id}</td><td>{name}</td><td>{email}</td><td>{phone}</td>\
                 <td>{message}</td><td>{created}</td><td>{ip}</td></tr>",
                id = contact.id,
                name = escape_html(&contact.name),
                email = escape_html(&contact.email),
                phone = escape_html(contact.phone.as_deref().unwrap_or("—")),
                message = escape_html(&message_preview(&contact.message)),
                created = contact.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                ip = escape_html(contact.ip_address.as_deref().unwrap_or("—")),
            );
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<nav>");
    if info.has_prev() {
        let _ = write!(
            body,
            "<a rel=\"prev\" href=\"{}\">← Назад</a> ",
            list_url(info.page - 1, search)
        );
    }
    if info.has_next() {
        let _ = write!(
            body,
            "<a rel=\"next\" href=\"{}\">Вперёд →</a>",
            list_url(info.page + 1, search)
        );
    }
    body.push_str("</nav>");

    layout("Заявки", &body)
}
