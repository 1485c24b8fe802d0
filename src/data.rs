// Static content pools cycled by article index. Loaded once at startup and
// shared read-only through the application state.

pub struct ContentPools {
    pub apps: Vec<String>,
    pub urls: Vec<String>,
    pub templates: Vec<String>,
    pub suffix_tag: String,
}

impl ContentPools {
    pub fn builtin() -> Self {
        ContentPools {
            apps: BUILTIN_APPS.iter().map(|s| s.to_string()).collect(),
            urls: BUILTIN_URLS.iter().map(|s| s.to_string()).collect(),
            templates: BUILTIN_TEMPLATES.iter().map(|s| s.to_string()).collect(),
            suffix_tag: "导航站".to_string(),
        }
    }
}

const BUILTIN_APPS: &[&str] = &[
    "NovaReader",
    "SkyPlayer",
    "CloudAlbum",
    "StarMusic",
    "BreezeNews",
    "LumenVideo",
    "PulseRadio",
    "OrbitMail",
    "EchoChat",
    "DriftNotes",
    "MapleCast",
    "FableBooks",
    "PrismPhotos",
    "RippleDocs",
    "VertexGames",
    "HarborDrive",
    "MeadowFit",
    "CometSearch",
];

const BUILTIN_URLS: &[&str] = &[
    "Latest Online Address",
    "Portal Page",
    "Current Available Address",
    "Permanent Address",
    "Official Latest Address",
    "Online Access Entry",
    "Quick Access Entry",
    "Backup Address",
    "Mirror Entry",
    "Direct Access Entry",
];

const BUILTIN_TEMPLATES: &[&str] = &[
    r#"{title}

🎉 Welcome to the official {app} {url} navigation page!

Dear user, to help you reach the latest address for {app} quickly, we maintain this navigation page. Whether this is your first visit or you are a returning user, the newest and most stable access links are collected here.

Keywords: {keywords_text}
Last Updated: {date}

The currently available entry is listed below. We recommend saving a bookmark in case the main link changes:
{mainLink}
📌 Why use this page:
- Link status is checked regularly so the entry stays reachable.
- Works on phones, tablets and desktop browsers alike.
- No registration or login required.
- A clean page with no pop-ups.

⚙️ If the page does not open:
- Refresh once or clear the browser cache.
- Try a different browser such as Chrome, Firefox or Edge.
- Open the link in a private window.
- Switch networks if your current connection is unstable.

✨ Bookmark this page so you can always find the latest address. Questions and feedback are welcome through the contact section.

Thank you for your trust, and enjoy {app}!
"#,
    r#"{title}

🔥 {app} - {url} is updated!

Service addresses change from time to time, so we keep this page current to make sure you always reach {app} at its newest address.

Keywords: {keywords_text}
Page Updated: {date}

🔗 Current entry:
{mainLink}
Why choose this page?
- Multiple lines are kept on standby so a single outage never locks you out.
- Entries are verified before they are published.
- The page is lightweight and loads fast on slow connections.
- No ads and no tracking.

🌟 Usage tips:
- Save more than one entry in your bookmarks.
- If loading is slow, clear the cache or switch networks.
- A recent version of Chrome or Firefox gives the best results.

💬 Support:
If an entry stops working, report it through the feedback channel and it will be replaced promptly.

Thank you for your continued support. Have a pleasant visit!
"#,
    r#"{title}

🚀 {app} official redirect portal - {url}

Hello and welcome. This page is maintained to provide the latest, safest and most stable entry for {app}.

Keyword Aggregation: {keywords_text}
Date: {date}
Official domain: {domain}

🌍 Available entry:
{mainLink}
📢 Access notes:
- On mobile devices, Chrome or Safari offers the best compatibility.
- If a page fails to load over WiFi, mobile data sometimes helps.
- A private window avoids stale cache issues.
- Clearing cookies fixes most display problems.

⚙️ Reliability:
- Every published link is tested before it goes live.
- Link status is re-checked daily.
- Problems can be reported through the official channel at any time.

❤️ Privacy:
No browsing behavior is tracked on this page. All visits are anonymous.

Bookmark this page to keep the latest entry at hand. Thank you for your support!
"#,
    r#"{title}

📢 The new {app} {url} navigation page is live!

Dear user, a stable and reliable access link matters. This page exists so you can always reach the latest address for {app} without searching.

Keywords: {keywords_text}
Page Updated: {date}

🔗 Current available address:
{mainLink}
📌 Highlights:
- Stable lines with fast, direct access.
- Compatible with all devices and major browsers.
- Valid links are refreshed as soon as they change.
- A tidy page without distractions.

⚙️ Troubleshooting:
- Page will not open? Refresh and clear the cache first.
- Link not responding? Use the backup entry.
- Display broken? Switch browsers or use a private window.

✨ Reminder:
Available addresses are checked every day. Bookmark this page to find the newest one at any time.

Thank you for your long-term support. Happy browsing!
"#,
    r#"{title}

🔥 Permanent bookmark guide - direct access to {app} {url}!

Hello! This page carries the latest address for {app} so a moved or renamed link never leaves you stranded. Through this portal you always reach the current entry.

Keywords: {keywords_text}
Updated: {date}
Home: {domain}

🌍 Latest entry:
{mainLink}
📌 What this page offers:
- The entry list is monitored so it stays available.
- Desktop and mobile layouts are both supported.
- Fast lines keep page loads short.
- Completely free, no registration required.

⚙️ Common issues:
- If access fails, refresh or try another browser.
- If the network is slow, switching networks usually helps.
- If an entry is temporarily down, use the backup address.

✨ Reminder:
Add this page to your browser bookmarks so the newest address is always one click away.

Thank you for your support, and enjoy your stay!
"#,
];
