use anyhow::{Result, anyhow};
use regex::Regex;

/// Values for one article's placeholder tokens. `title`, `domain` and
/// `mainLink` carry separate HTML and plain representations; the rest are
/// shared between both renderings.
pub struct RenderVars<'a> {
    pub title_html: &'a str,
    pub title_plain: &'a str,
    pub app: &'a str,
    pub url: &'a str,
    pub keywords_text: &'a str,
    pub date: &'a str,
    pub domain: &'a str,
    pub main_link_html: &'a str,
    pub main_link_plain: &'a str,
}

impl<'a> RenderVars<'a> {
    fn value(&self, token: &str, html: bool) -> Option<&'a str> {
        Some(match token {
            "title" => {
                if html {
                    self.title_html
                } else {
                    self.title_plain
                }
            }
            "app" => self.app,
            "url" => self.url,
            "keywords_text" => self.keywords_text,
            "date" => self.date,
            "domain" => self.domain,
            "mainLink" => {
                if html {
                    self.main_link_html
                } else {
                    self.main_link_plain
                }
            }
            _ => return None,
        })
    }
}

pub struct Rendered {
    pub html: String,
    // Plain rendering for hosts that export articles as text; the service
    // response itself only ships the HTML body.
    #[allow(dead_code)]
    pub plain: String,
}

// Fill a template's placeholder tokens and produce both renderings. The HTML
// variant gets its newlines converted to line breaks; the plain variant keeps
// them. A token the var set cannot bind is a caller error, not a no-op.
pub fn render(template: &str, vars: &RenderVars) -> Result<Rendered> {
    let token_re = Regex::new(r"\{([A-Za-z_]+)\}")?;

    let plain = substitute(template, &token_re, |token| vars.value(token, false))?;
    let html = substitute(template, &token_re, |token| vars.value(token, true))?
        .replace('\n', "<br />");

    Ok(Rendered { html, plain })
}

// One pass over the template: each token occurrence is replaced by its bound
// value, and replacement values are never re-scanned for further tokens.
fn substitute<'a>(
    template: &str,
    token_re: &Regex,
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in token_re.captures_iter(template) {
        let matched = caps.get(0).unwrap();
        let token = caps.get(1).unwrap().as_str();
        let value = lookup(token)
            .ok_or_else(|| anyhow!("template references unbound token {}", matched.as_str()))?;
        out.push_str(&template[last..matched.start()]);
        out.push_str(value);
        last = matched.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}
