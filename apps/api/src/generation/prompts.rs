// All prompt text for the Generation module.
// Reuses the marker fragments from llm_client::prompts.

/// A named promotional/informational balance for one variation.
#[derive(Debug, Clone, Copy)]
pub struct StyleMix {
    pub name: &'static str,
    pub description: &'static str,
}

/// Assigned to variations 1, 2, 3 in this order.
pub const STYLE_MIXES: [StyleMix; 3] = [
    StyleMix {
        // 50% product promotion + 50% knowledge sharing
        name: "50% ကုန်ပစ္စည်းမြှင့်တင်မှု + 50% အသိပညာ ဝေမျှမှု",
        description: "ထုတ်ကုန်အကြောင်း အတူတူ နှင့် ဗဟုသုတ အတူတူ ပေါင်းစပ်ပြီး ဟန်ချက်ညီညီ ရေးသားပါ",
    },
    StyleMix {
        // 30% product promotion + 70% knowledge sharing
        name: "30% ကုန်ပစ္စည်းမြှင့်တင်မှု + 70% အသိပညာ ဝေမျှမှု",
        description: "အသိပညာနှင့် အချက်အလက်များကို အဓိကထား၍ ထုတ်ကုန်ကို သဘာဝကျကျ ထည့်သွင်းရေးသားပါ",
    },
    StyleMix {
        // 70% product promotion + 30% knowledge sharing
        name: "70% ကုန်ပစ္စည်းမြှင့်တင်မှု + 30% အသိပညာ ဝေမျှမှု",
        description: "ထုတ်ကုန်အရောင်းကို အဓိကထား၍ အနည်းငယ်သော ဗဟုသုတဖြင့် ပံ့ပိုးရေးသားပါ",
    },
];

/// Lower-cased audience text containing any of these gets the adult addendum.
pub const ADULT_AUDIENCE_MARKERS: &[&str] = &["18", "လူကြီး", "အရွယ်ရောက်"];

/// Persona preamble. Replace `{count}`.
pub const PERSONA_TEMPLATE: &str = "\
သင်သည် ပရော်ဖက်ရှင်နယ် မြန်မာဘာသာ Social Media Content Writer ဖြစ်သည်။

အောက်ပါ ရေးသားမှုပုံစံ {count} မျိုးဖြင့် content များရေးပေးပါ:";

/// One numbered style mix. Replace `{index}`, `{name}`, `{description}`.
pub const STYLE_MIX_TEMPLATE: &str = "{index}. {name}:\n   {description}";

pub const CREATIVE_GUIDANCE: &str = "\
တွေ့ဆုံမှု နည်းလမ်းများ:

🎯 Creative Elements (ဖန်တီးမှုဆိုင်ရာ အင်္ဂါရပ်များ):
- စွဲမှတ်ဖွယ်ကောင်းသော စကားလုံးများ အသုံးပြုပါ
- တစ်ခါတစ်ရံ ရယ်စရာကောင်းသော စကားလုံးများ သုံးပါ
- သင့်လျော်သော နာမည်ကြီး ကိုးကားချက်များ ထည့်သွင်းပါ
- လက်ရှိခေတ် လူကြိုက်များသော အကြောင်းအရာများနှင့် ချိတ်ဆက်ပါ (သင့်လျော်မှုရှိလျှင်)
- မြန်မာ့ယဉ်ကျေးမှုနှင့် ညီညွတ်သော ပုံပြင်များ အသုံးပြုပါ
- စိတ်လှုပ်ရှားမှုဖြစ်စေသော အကြောင်းအရာများ ထည့်သွင်းပါ";

/// Appended only for adult audiences.
pub const ADULT_AUDIENCE_GUIDANCE: &str = "\
💕 အရွယ်ရောက်ပြီးသူများအတွက် အပိုအကြောင်းအရာများ:
- ချစ်ခြင်းမေတ္တာ နှင့် အိမ်ထောင်ရေး ဘဝနှင့် သက်ဆိုင်သော အကြောင်းအရာများ
- ထုတ်ကုန်/ဝန်ဆောင်မှုကို အချစ်ရေး သို့မဟုတ် မိသားစုဘဝနှင့် ချိတ်ဆက်ပြီး ရေးသားပါ
- ရင့်ကျက်သော ချစ်ခြင်းမေတ္တာ အကြောင်းအရာများ";

pub const CONTEXT_GUIDANCE: &str = "\
🎨 နောက်ထပ် အခြေအနေများ:
- ပွဲတော်များနှင့် အထူးနေ့များ (သင့်လျော်မှုရှိလျှင်)
- လူ့အဖွဲ့အစည်း ကိစ္စရပ်များနှင့် ချိတ်ဆက်မှု
- နည်းပညာ တိုးတက်မှုများနှင့် ကိုက်ညီမှု
- ပတ်ဝန်းကျင် ထိန်းသိမ်းမှု အကြောင်းအရာများ
- ကျန်းမာရေး နှင့် အားကစား အကြောင်းအရာများ
- ပညာရေး နှင့် ကျွမ်းကျင်မှု ဖွံ့ဖြိုးတိုးတက်မှု
- စီးပွားရေး နှင့် အလုပ်အကိုင် ဆိုင်ရာ အကြောင်းအရာများ";

/// Five rules: natural Burmese, cultural context, platform format,
/// audience engagement, cultural consistency.
pub const AUTHORING_CHECKLIST: &str = "\
📝 အရေးကြီးသော ညွှန်ကြားချက်များ:
1. သဘာဝကျကျ မြန်မာဘာသာ အသုံးပြုပါ
2. Cultural context နှင့် သင့်လျော်အောင် ရေးပါ
3. Platform နှင့် သင့်လျော်သော format ဖြစ်အောင် ရေးပါ
4. ပရိသတ်ကို ဆွဲဆောင်ရန် နှင့် ပါဝင်လိုစိတ်ဖြစ်စေရန်
5. အကြောင်းအရာများကို မြန်မာ့ယဉ်ကျေးမှုနှင့် ညီညွတ်အောင် ရေးပါ";

// Placeholders for empty request fields.
/// "Not specified"
pub const NOT_SPECIFIED: &str = "မသတ်မှတ်ထားပါ";
/// "None"
pub const NONE_GIVEN: &str = "မရှိပါ";
/// "General public"
pub const GENERAL_AUDIENCE: &str = "ယေဘုယျ လူထု";
/// "Will be included"
pub const FLAG_YES: &str = "ပါဝင်မည်";
/// "Not included"
pub const FLAG_NO: &str = "မပါဝင်ပါ";

/// Full generation prompt. Every `{name}` is filled once by `fill_template`.
pub const GENERATION_PROMPT_TEMPLATE: &str = "{guidelines}

လက်ရှိ တောင်းဆိုမှု အချက်အလက်များ:

Platform: {platform}
Content Type: {content_type}
Content Length: {content_length}
Objective: {objective}
Style/Tone: {style}
Content Category: {content_category}
Product/Service Name: {product_name}
Key Message/Details: {key_message}
Target Audience: {target_audience}
Keywords: {keywords}
Business Page Link: {business_page_link}
Include CTA: {include_cta}
Include Emojis: {include_emojis}
Include Hashtags: {include_hashtags}
Number of Variations: {num_variations}

ကျေးဇူးပြု၍ {num_variations} ခုသော မတူညီသော content variations များကို အထက်ပါ ပရော်ဖက်ရှင်နယ် ရေးသားမှုပုံစံများဖြင့် ရေးပေးပါ။

{marker_instruction}

{language_instruction}";
