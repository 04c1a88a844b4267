use super::*;

const ELEMENT_TYPE_WEIGHTS: &[(&str, f64)] = &[
  ("article", 20.0),
  ("aside", -10.0),
  ("blockquote", 5.0),
  ("center", -2.0),
  ("div", 0.0),
  ("figure", 10.0),
  ("footer", -10.0),
  ("header", -10.0),
  ("layer", -5.0),
  ("main", 20.0),
  ("multicol", -5.0),
  ("nav", -20.0),
  ("picture", 5.0),
  ("pre", 5.0),
  ("section", 5.0),
  ("table", 0.0),
  ("td", 3.0),
  ("tr", 1.0),
];

const ATTRIBUTE_TOKEN_WEIGHTS: &[(&str, f64)] = &[
  ("about", -35.0),
  ("account", -20.0),
  ("ad", -50.0),
  ("adbox", -50.0),
  ("adcontainer", -50.0),
  ("additional", -20.0),
  ("adsense", -50.0),
  ("adset", -50.0),
  ("adslot", -50.0),
  ("adspace", -50.0),
  ("adtech", -50.0),
  ("adunit", -50.0),
  ("adv", -50.0),
  ("advert", -50.0),
  ("advertise", -50.0),
  ("advertisement", -50.0),
  ("advertising", -50.0),
  ("adwrapper", -50.0),
  ("aggregate", -10.0),
  ("alert", -20.0),
  ("announce", -10.0),
  ("archive", -20.0),
  ("archives", -20.0),
  ("art", 10.0),
  ("article", 30.0),
  ("articlebody", 40.0),
  ("articlecontent", 40.0),
  ("articles", 10.0),
  ("articletext", 40.0),
  ("aside", -40.0),
  ("attachment", 10.0),
  ("author", -10.0),
  ("avatar", -20.0),
  ("badge", -20.0),
  ("banner", -40.0),
  ("bar", -10.0),
  ("below", -10.0),
  ("blog", 10.0),
  ("blogpost", 20.0),
  ("blogroll", -40.0),
  ("body", 20.0),
  ("bodytext", 30.0),
  ("bookmark", -20.0),
  ("bottom", -20.0),
  ("box", -5.0),
  ("breadcrumb", -40.0),
  ("breadcrumbs", -40.0),
  ("brand", -20.0),
  ("breaking", -10.0),
  ("button", -20.0),
  ("buttons", -20.0),
  ("byline", -10.0),
  ("calendar", -20.0),
  ("callout", -10.0),
  ("caption", 10.0),
  ("card", -5.0),
  ("carousel", -30.0),
  ("cat", -10.0),
  ("categories", -20.0),
  ("category", -10.0),
  ("cbox", -10.0),
  ("chrome", -30.0),
  ("cite", 5.0),
  ("cloud", -20.0),
  ("cmt", -40.0),
  ("cnn", -10.0),
  ("col", -5.0),
  ("column", 5.0),
  ("combx", -20.0),
  ("comment", -40.0),
  ("commentary", -20.0),
  ("comments", -50.0),
  ("community", -20.0),
  ("complementary", -30.0),
  ("component", -5.0),
  ("connect", -20.0),
  ("contact", -20.0),
  ("container", 5.0),
  ("content", 20.0),
  ("contentpane", 20.0),
  ("contents", 10.0),
  ("contrib", -10.0),
  ("controls", -20.0),
  ("cookie", -40.0),
  ("copy", 5.0),
  ("copyright", -30.0),
  ("credit", -10.0),
  ("date", -10.0),
  ("dateline", -10.0),
  ("deck", 10.0),
  ("description", 10.0),
  ("dialog", -30.0),
  ("disclaimer", -20.0),
  ("discuss", -30.0),
  ("discussion", -30.0),
  ("disqus", -50.0),
  ("donate", -30.0),
  ("dropdown", -30.0),
  ("editor", -5.0),
  ("email", -20.0),
  ("embed", -5.0),
  ("entry", 20.0),
  ("entrybody", 30.0),
  ("entrycontent", 40.0),
  ("error", -20.0),
  ("excerpt", 5.0),
  ("external", -10.0),
  ("extra", -20.0),
  ("facebook", -30.0),
  ("fb", -30.0),
  ("feature", 10.0),
  ("featured", 5.0),
  ("feed", -10.0),
  ("fig", 10.0),
  ("figure", 10.0),
  ("follow", -30.0),
  ("foot", -30.0),
  ("footer", -40.0),
  ("footnote", -5.0),
  ("footnotes", -5.0),
  ("form", -20.0),
  ("gallery", 5.0),
  ("gdpr", -40.0),
  ("google", -20.0),
  ("guide", 5.0),
  ("hdr", -20.0),
  ("head", -10.0),
  ("header", -20.0),
  ("headline", -5.0),
  ("hentry", 20.0),
  ("hero", 5.0),
  ("hidden", -30.0),
  ("highlight", 5.0),
  ("home", -20.0),
  ("icon", -20.0),
  ("image", 10.0),
  ("img", 5.0),
  ("index", -10.0),
  ("info", -5.0),
  ("inline", 5.0),
  ("inner", 10.0),
  ("insert", -10.0),
  ("instagram", -30.0),
  ("item", -5.0),
  ("itembody", 30.0),
  ("jump", -20.0),
  ("keywords", -20.0),
  ("label", -10.0),
  ("layout", -5.0),
  ("lead", 10.0),
  ("left", -20.0),
  ("legal", -30.0),
  ("license", -20.0),
  ("like", -20.0),
  ("link", -20.0),
  ("linkedin", -30.0),
  ("links", -30.0),
  ("list", -10.0),
  ("login", -40.0),
  ("logo", -30.0),
  ("main", 30.0),
  ("mainbar", 20.0),
  ("maincontent", 40.0),
  ("marketing", -40.0),
  ("masthead", -30.0),
  ("media", 5.0),
  ("menu", -40.0),
  ("meta", -30.0),
  ("misc", -10.0),
  ("modal", -40.0),
  ("module", -10.0),
  ("more", -20.0),
  ("mostpopular", -40.0),
  ("nav", -40.0),
  ("navbar", -40.0),
  ("navigation", -40.0),
  ("navlinks", -40.0),
  ("network", -20.0),
  ("newsletter", -40.0),
  ("next", -20.0),
  ("notice", -20.0),
  ("offer", -30.0),
  ("outbrain", -50.0),
  ("overlay", -40.0),
  ("page", 10.0),
  ("pagination", -30.0),
  ("pager", -30.0),
  ("paging", -30.0),
  ("panel", -10.0),
  ("paragraph", 10.0),
  ("partner", -30.0),
  ("permalink", -20.0),
  ("photo", 10.0),
  ("pinterest", -30.0),
  ("player", -5.0),
  ("plugin", -20.0),
  ("popular", -40.0),
  ("popup", -50.0),
  ("post", 20.0),
  ("postbody", 40.0),
  ("postcontent", 40.0),
  ("posted", -10.0),
  ("poster", -5.0),
  ("posts", -10.0),
  ("posttext", 40.0),
  ("prev", -20.0),
  ("previous", -20.0),
  ("primary", 10.0),
  ("print", -20.0),
  ("privacy", -30.0),
  ("profile", -20.0),
  ("promo", -50.0),
  ("promotion", -50.0),
  ("pub", -5.0),
  ("qa", -10.0),
  ("quote", 5.0),
  ("rail", -30.0),
  ("rating", -20.0),
  ("read", -10.0),
  ("recent", -20.0),
  ("recirc", -40.0),
  ("recommend", -40.0),
  ("recommended", -40.0),
  ("reference", -5.0),
  ("register", -30.0),
  ("related", -40.0),
  ("relatedposts", -50.0),
  ("remark", -30.0),
  ("replies", -40.0),
  ("reply", -40.0),
  ("respond", -40.0),
  ("retweet", -30.0),
  ("review", 5.0),
  ("right", -20.0),
  ("rss", -40.0),
  ("search", -40.0),
  ("secondary", -20.0),
  ("section", 5.0),
  ("see", -10.0),
  ("share", -40.0),
  ("sharebar", -50.0),
  ("sharing", -40.0),
  ("shopping", -40.0),
  ("shoutbox", -50.0),
  ("side", -30.0),
  ("sidebar", -50.0),
  ("signin", -40.0),
  ("signup", -40.0),
  ("site", -10.0),
  ("sitemap", -40.0),
  ("skip", -30.0),
  ("skyscraper", -50.0),
  ("slide", -10.0),
  ("slider", -20.0),
  ("slideshow", -10.0),
  ("snippet", -5.0),
  ("social", -40.0),
  ("sponsor", -50.0),
  ("sponsored", -50.0),
  ("stats", -20.0),
  ("story", 30.0),
  ("storybody", 40.0),
  ("storycontent", 40.0),
  ("storytext", 40.0),
  ("subheader", -5.0),
  ("submit", -30.0),
  ("subnav", -40.0),
  ("subscribe", -50.0),
  ("subscription", -40.0),
  ("summary", 10.0),
  ("supplemental", -30.0),
  ("survey", -30.0),
  ("table", 0.0),
  ("tabs", -30.0),
  ("tag", -20.0),
  ("tagline", -20.0),
  ("tags", -30.0),
  ("teaser", -20.0),
  ("text", 20.0),
  ("textbody", 30.0),
  ("thumb", -20.0),
  ("thumbnail", -20.0),
  ("timestamp", -10.0),
  ("tip", -10.0),
  ("title", -5.0),
  ("toc", -20.0),
  ("toolbar", -40.0),
  ("tools", -30.0),
  ("top", -10.0),
  ("topics", -20.0),
  ("trackback", -40.0),
  ("trending", -40.0),
  ("tumblr", -30.0),
  ("tweet", -30.0),
  ("twitter", -30.0),
  ("upsell", -50.0),
  ("user", -20.0),
  ("utility", -30.0),
  ("video", 5.0),
  ("view", -5.0),
  ("vote", -30.0),
  ("whatsapp", -30.0),
  ("widget", -40.0),
  ("widgets", -40.0),
  ("wrapper", 5.0),
  ("youtube", -5.0),
];

static ELEMENT_TYPE_BIAS: LazyLock<HashMap<&'static str, f64>> =
  LazyLock::new(|| ELEMENT_TYPE_WEIGHTS.iter().copied().collect());

static ATTRIBUTE_TOKEN_BIAS: LazyLock<HashMap<&'static str, f64>> =
  LazyLock::new(|| ATTRIBUTE_TOKEN_WEIGHTS.iter().copied().collect());

/// Weight of a block's tag name. Unknown tags weigh nothing.
pub(crate) fn element_type_weight(tag: &str) -> f64 {
  ELEMENT_TYPE_BIAS.get(tag).copied().unwrap_or_default()
}

/// Weight of a single attribute token. Unknown tokens weigh nothing.
pub(crate) fn attribute_token_weight(token: &str) -> f64 {
  ATTRIBUTE_TOKEN_BIAS.get(token).copied().unwrap_or_default()
}
