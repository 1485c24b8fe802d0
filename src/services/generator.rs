use chrono::{Local, NaiveDate};

use crate::data::ContentPools;
use crate::models::{Article, GenerateError, GenerateRequest, Result};
use crate::services::keywords::{self, IndexedDraw};
use crate::services::render::{self, RenderVars};
use crate::services::suffix;

// Generate one article per secondary keyword, in input order. The whole call
// either succeeds or fails; no partial result list is ever returned.
pub fn generate_articles(request: &GenerateRequest, pools: &ContentPools) -> Result<Vec<Article>> {
    generate_with_date(request, pools, Local::now().date_naive())
}

// Same as `generate_articles` with the calendar date passed in, so one date
// is fixed for every article of the call and tests can pin it.
pub fn generate_with_date(
    request: &GenerateRequest,
    pools: &ContentPools,
    today: NaiveDate,
) -> Result<Vec<Article>> {
    if request.primary_keywords.is_empty()
        || request.secondary_keywords.is_empty()
        || request.cy.is_empty()
        || request.chosen_link.is_empty()
    {
        return Err(GenerateError::InvalidInput);
    }

    let primary = normalize_keywords(&request.primary_keywords);
    let secondary = normalize_keywords(&request.secondary_keywords);
    if primary.is_empty() || secondary.is_empty() {
        return Err(GenerateError::EmptyKeywordSet);
    }

    // Everything derived from the date or the link is computed once up front;
    // articles within one call must agree on these values.
    let date_suffix = format!("{}-{}|{}", today.format("%m%d"), request.cy, pools.suffix_tag);
    let date_full = today.format("%Y-%m-%d").to_string();

    let host = request.chosen_link.as_str();
    let domain = format!("https://{}/", host);
    let escaped_domain = html_escape::encode_double_quoted_attribute(&domain).to_string();
    let link_html = format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>",
        escaped_domain,
        html_escape::encode_text(host),
    );
    let main_link_html = format!(
        "<p style=\"font-size: 8rem; text-align: left;\"><a href=\"{}\" target=\"_blank\">👉👉立即进入👈👈</a></p>",
        escaped_domain,
    );

    let mut results = Vec::with_capacity(secondary.len());

    for (i, driver) in secondary.iter().enumerate() {
        let app = &pools.apps[i % pools.apps.len()];
        let url = &pools.urls[i % pools.urls.len()];
        let template = &pools.templates[i % pools.templates.len()];
        let primary_kw = &primary[i % primary.len()];

        let slots = keywords::select_keywords(&primary, &secondary, i, driver, &IndexedDraw);

        let seed = format!("{}{}{}", primary_kw, driver, i);
        let rand_suffix = suffix::suffix(&seed, 6);

        let plain_title = format!(
            "{} - {} -【链接地址：{}】- {} - {} - {} {}",
            slots[0], slots[1], host, slots[2], slots[3], date_suffix, rand_suffix
        );
        let title_with_link = format!(
            "{} - {} -【链接地址：{}】- {} - {} - {} {}",
            slots[0], slots[1], link_html, slots[2], slots[3], date_suffix, rand_suffix
        );

        let keywords_text = slots
            .iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        let vars = RenderVars {
            title_html: &title_with_link,
            title_plain: &plain_title,
            app,
            url,
            keywords_text: &keywords_text,
            date: &date_full,
            domain: &domain,
            main_link_html: &main_link_html,
            main_link_plain: host,
        };
        let rendered = render::render(template, &vars).map_err(|_| GenerateError::Internal)?;

        results.push(Article {
            plain_title,
            title_with_link,
            content: rendered.html,
        });
    }

    Ok(results)
}

// Raw keyword fields are comma- or newline-separated; surrounding whitespace
// is dropped along with empty entries.
fn normalize_keywords(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
