//! Static page copy.
//!
//! Everything the landing page prints lives here as typed constants so the
//! components stay purely structural.

use crate::scroll::Section;

/// Icons used across the page. The UI maps each to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Bot,
    Workflow,
    Message,
    Book,
    PieChart,
    Palette,
    Zap,
    Users,
    Smartphone,
    Youtube,
    Instagram,
    Layout,
    Trending,
    Check,
    Shield,
    Sparkles,
    Monitor,
}

/// Card in a grid (features, audience, architecture)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: Icon,
    /// Small uppercase label above the title; empty when unused
    pub label: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

impl Card {
    const fn new(icon: Icon, label: &'static str, title: &'static str, text: &'static str) -> Self {
        Self {
            icon,
            label,
            title,
            text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Tone of a dashboard stat's detail line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Info,
    /// Painted with the brand color
    Featured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
    pub tone: Tone,
}

/// One bubble of the canned AI chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    pub from_user: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentBadge {
    pub name: &'static str,
    pub logo: &'static str,
}

/// The single pricing card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    pub ribbon: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub currency: &'static str,
    pub price: &'static str,
    pub terms: &'static str,
    pub includes: &'static [&'static str],
    pub cta: &'static str,
    pub payment_note: &'static str,
    pub badges: &'static [PaymentBadge],
    pub guarantee: &'static str,
}

pub const PRODUCT_NAME: &str = "FinanSaaS Pro";

pub const NAV_CTA: (&str, Section) = ("Garantir Acesso", Section::Checkout);

pub const HERO_BADGE: &str = "LANCE SUA PRÓPRIA PLATAFORMA HOJE";
pub const HERO_TITLE: &str = "Tenha Seu Próprio SaaS:";
pub const HERO_TITLE_HIGHLIGHT: &str = "Código-Fonte e Revenda Ilimitada";
pub const HERO_PRIMARY_CTA: &str = "Garantir Código + Licença";
pub const HERO_SECONDARY_CTA: &str = "Ver Recursos do Sistema";
pub const HERO_VIDEO_URL: &str = "https://www.youtube.com/embed/yu4L4sK5YUY";

pub const FEATURES: [Card; 6] = [
    Card::new(
        Icon::Bot,
        "INTELIGÊNCIA ARTIFICIAL",
        "Agente Financeiro IA",
        "Insights de elite e análise estratégica de negócios em tempo real integrada.",
    ),
    Card::new(
        Icon::Workflow,
        "AUTOMAÇÃO N8N",
        "Automações & N8N",
        "Fluxos de trabalho inteligentes e integrações complexas prontas para escalar.",
    ),
    Card::new(
        Icon::Message,
        "WHATSAPP BOT",
        "Conexão WhatsApp",
        "Transforme conversas em dados financeiros automáticos via API Oficial.",
    ),
    Card::new(
        Icon::Book,
        "ADMINISTRAÇÃO",
        "Livro Caixa Completo",
        "Gestão completa de fluxo e auditoria com visão clara de todas as transações.",
    ),
    Card::new(
        Icon::PieChart,
        "INDICADORES",
        "Dashboard de Métricas",
        "Acompanhe MRR, Churn e faturamento real em um painel profissional.",
    ),
    Card::new(
        Icon::Palette,
        "PERSONALIZAÇÃO",
        "White Label Total",
        "Troque logos, cores e domínios. Um SaaS 100% seu para vender com sua marca.",
    ),
];

pub const TRUST_STATS: [Stat; 4] = [
    Stat {
        value: "45%",
        label: "Crescimento Médio",
    },
    Stat {
        value: "98%",
        label: "Satisfação Clientes",
    },
    Stat {
        value: "24h",
        label: "Time-to-Market",
    },
    Stat {
        value: "R$ 50k",
        label: "Economia Tech",
    },
];

pub const BROWSER_URL: &str = "app.finansaaspro.com.br";

pub const AI_BULLETS: [&str; 3] = [
    "Análises financeiras automatizadas",
    "Leitura de dados em linguagem natural",
    "Apoio estratégico na tomada de decisão",
];

pub const AI_CHAT: [ChatMessage; 3] = [
    ChatMessage {
        from_user: false,
        text: "Olá! Sou o assistente de IA do FinanSaaS. Como posso ajudar com sua gestão financeira hoje?",
    },
    ChatMessage {
        from_user: true,
        text: "O que é MRR e como o FinanSaaS calcula?",
    },
    ChatMessage {
        from_user: false,
        text: "MRR (Monthly Recurring Revenue) é sua receita mensal recorrente. Eu calculo somando todos os seus planos ativos menos o churn do período. Quer que eu analise seu faturamento deste mês?",
    },
];

pub const WHITE_LABEL_PERKS: [(&str, &str); 3] = [
    ("Código-Fonte Completo", "Acesso total aos arquivos do sistema."),
    ("White-Label Vitalício", "Sua marca, suas regras, sem mensalidades."),
    ("Revenda Ilimitada", "Venda para quantos clientes quiser e lucre 100%."),
];

/// Sidebar of the simulated dashboard; the first entry is highlighted
pub const DASHBOARD_NAV: [(Icon, &str); 6] = [
    (Icon::Layout, "Dashboard"),
    (Icon::Workflow, "Transações"),
    (Icon::Message, "WhatsApp Bot"),
    (Icon::Bot, "Agente IA"),
    (Icon::Zap, "Automações"),
    (Icon::Palette, "White Label"),
];

pub const DASHBOARD_STATS: [DashboardStat; 4] = [
    DashboardStat {
        label: "FATURAMENTO (MRR)",
        value: "R$ 20.500",
        detail: "↑ 24.8% ESTE MÊS",
        tone: Tone::Positive,
    },
    DashboardStat {
        label: "BURN RATE (SAÍDAS)",
        value: "R$ 14.200",
        detail: "CUSTO OPERACIONAL CONTROLADO",
        tone: Tone::Negative,
    },
    DashboardStat {
        label: "MARGEM DE LUCRO",
        value: "30.7%",
        detail: "ALTAMENTE ESCALÁVEL",
        tone: Tone::Featured,
    },
    DashboardStat {
        label: "CHURN RATE",
        value: "1.8%",
        detail: "SAÚDE DA BASE: OK",
        tone: Tone::Info,
    },
];

pub const CHART_MONTHS: [&str; 6] = ["Jun", "Jul", "Ago", "Set", "Out", "Nov"];

pub const AUDIENCE: [Card; 6] = [
    Card::new(
        Icon::Zap,
        "",
        "Empreendedores",
        "Lance seu MVP em tempo recorde e foque no marketing.",
    ),
    Card::new(
        Icon::Users,
        "",
        "Agências",
        "Ofereça valor agregado para seus clientes de consultoria.",
    ),
    Card::new(
        Icon::Book,
        "",
        "Contadores",
        "Modernize sua entrega com um sistema financeiro premium.",
    ),
    Card::new(
        Icon::Smartphone,
        "",
        "Desenvolvedores",
        "Economize centenas de horas de desenvolvimento base.",
    ),
    Card::new(
        Icon::Youtube,
        "",
        "Produtores Digitais",
        "Crie uma nova fonte de receita recorrente para sua audiência.",
    ),
    Card::new(
        Icon::PieChart,
        "",
        "Investidores",
        "Uma base sólida para criar um ecossistema de SaaS.",
    ),
];

pub const ARCHITECTURE: [Card; 6] = [
    Card::new(
        Icon::Bot,
        "",
        "Agente de IA Integrado",
        "O sistema já vem com IA treinada para análise financeira.",
    ),
    Card::new(
        Icon::PieChart,
        "",
        "Dashboard Moderno",
        "Visualização profissional de MRR, Churn e faturamento.",
    ),
    Card::new(
        Icon::Palette,
        "",
        "White-Label Total",
        "Troque logos, cores e nomes em segundos.",
    ),
    Card::new(
        Icon::Workflow,
        "",
        "Integração com n8n",
        "Automações inteligentes prontas para escalar seu negócio.",
    ),
    Card::new(
        Icon::Users,
        "",
        "Multi-Usuário",
        "Estrutura pronta para times e níveis de permissão.",
    ),
    Card::new(
        Icon::Smartphone,
        "",
        "Código-Fonte Completo",
        "Receba 100% do código para editar como quiser.",
    ),
];

pub const OFFER: Offer = Offer {
    ribbon: "ACESSO TOTAL + REVENDA",
    name: "FinanSaaS Premium",
    tagline: "Tudo que você precisa para seu próprio SaaS.",
    currency: "R$",
    price: "19,90",
    terms: "Pagamento Único • Sem Mensalidades",
    includes: &[
        "Código-Fonte 100% Editável",
        "Direito de Revenda Ilimitado",
        "White-Label Total (Troca de Marca)",
        "Agente de IA Integrado",
        "Dashboard Financeiro Completo",
        "Integração n8n Pronta",
        "Atualizações Vitalícias",
    ],
    cta: "Garantir Meu Acesso Agora",
    payment_note: "Pagamento seguro via PerfectPay. Entrega imediata no seu e-mail.",
    badges: &[
        PaymentBadge {
            name: "Visa",
            logo: "https://upload.wikimedia.org/wikipedia/commons/5/5e/Visa_Inc._logo.svg",
        },
        PaymentBadge {
            name: "Mastercard",
            logo: "https://upload.wikimedia.org/wikipedia/commons/2/2a/Mastercard-logo.svg",
        },
        PaymentBadge {
            name: "PIX",
            logo: "https://upload.wikimedia.org/wikipedia/commons/a/a2/Logo_Pix_Brasil.png",
        },
    ],
    guarantee: "Garantia incondicional de 7 dias. Não gostou? Devolvemos seu dinheiro.",
};

pub const FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "O código fonte é realmente meu?",
        answer: "Sim! Ao adquirir, você recebe o repositório completo do sistema para baixar, modificar e instalar onde quiser. A licença é vitalícia e 100% sua.",
    },
    FaqEntry {
        question: "Posso instalar em quantos domínios quiser?",
        answer: "Exatamente. Nossa licença permite instalações ilimitadas. Você pode criar um ecossistema completo de SaaS para diferentes nichos usando a mesma base.",
    },
    FaqEntry {
        question: "Quais tecnologias são utilizadas?",
        answer: "O FinanSaaS Pro utiliza uma stack robusta com PHP moderno, Node.js para integrações de IA, banco de dados relacional e integrações nativas com APIs n8n e WhatsApp.",
    },
    FaqEntry {
        question: "O treinamento está incluso?",
        answer: "Com certeza! Preparamos uma área de membros exclusiva ensinando passo a passo como realizar a instalação, configurar seu servidor e personalizar sua marca em minutos.",
    },
    FaqEntry {
        question: "Como funciona o suporte?",
        answer: "Oferecemos suporte prioritário via WhatsApp para ajudar em qualquer dúvida técnica ou de configuração que possa surgir durante o seu início.",
    },
];

pub const FOOTER_BLURB: &str = "A base tecnológica completa para o seu próximo grande negócio digital. Gestão financeira inteligente, automatizada e pronta para ser sua ou para revender.";

/// Footer "Plataforma" column
pub const FOOTER_LINKS: [Section; 5] = [
    Section::Features,
    Section::Dashboard,
    Section::Opportunity,
    Section::Faq,
    Section::Checkout,
];

/// Product screenshots shown in the interface carousel
pub const DEFAULT_SLIDES: [&str; 11] = [
    "https://images.unsplash.com/photo-1551288049-bbbda536339a?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1504868584819-f8e90526ef49?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1551288049-bbbda536339a?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1504868584819-f8e90526ef49?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1551288049-bbbda536339a?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=1200",
    "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80&w=1200",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_featured_dashboard_stat() {
        let featured = DASHBOARD_STATS
            .iter()
            .filter(|s| s.tone == Tone::Featured)
            .count();
        assert_eq!(featured, 1);
    }

    #[test]
    fn test_footer_links_have_anchors() {
        for section in FOOTER_LINKS {
            assert!(section.anchor().is_some(), "{:?}", section);
        }
        assert_eq!(NAV_CTA.1.anchor(), Some("checkout"));
    }

    #[test]
    fn test_default_slides_are_non_empty() {
        assert!(!DEFAULT_SLIDES.is_empty());
        assert!(DEFAULT_SLIDES.iter().all(|s| s.starts_with("https://")));
    }
}
