//! Static per-category assembly tables
//!
//! Each category maps to a fixed, ordered list of steps. Keeping the
//! catalog as data rather than branching logic lets tests enumerate every
//! category mechanically.

use super::Category;
use crate::guides::GuideRole;

/// One assembly step of a category report
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// A fixed text piece, emitted as-is
    Literal(&'static str),
    /// One piece per listed heading found in the guide
    Extract {
        guide: GuideRole,
        headings: &'static [&'static str],
    },
}

/// The ordered assembly steps for `category`
pub fn steps(category: Category) -> &'static [Step] {
    match category {
        Category::Examples => EXAMPLES,
        Category::WebDocs => WEB_DOCS,
        Category::Frameworks => FRAMEWORKS,
        Category::ServerBasics => SERVER_BASICS,
        Category::ClientBasics => CLIENT_BASICS,
        Category::BestPractices => BEST_PRACTICES,
        Category::ProtocolDetails => PROTOCOL_DETAILS,
        Category::Troubleshooting => TROUBLESHOOTING,
    }
}

const EXAMPLES: &[Step] = &[
    Step::Literal("# MCP Implementation Examples\n\n"),
    Step::Literal("## Server Examples\n"),
    Step::Extract {
        guide: GuideRole::Server,
        headings: &[
            "## 8. Example Implementations",
            "### Complete TypeScript Server Example",
            "#### Example: File System Tool",
            "#### Example: Database Resource",
        ],
    },
    Step::Literal("\n## Client Examples\n"),
    Step::Extract {
        guide: GuideRole::Client,
        headings: &[
            "### Complete Example: Multi-Tool Client with LLM Integration",
            "#### Example: OpenAI Integration",
            "#### Example: Anthropic Claude Integration",
        ],
    },
    Step::Literal("\n## Additional Examples\n"),
    Step::Extract {
        guide: GuideRole::Reference,
        headings: &[
            "## 12. Examples: Comprehensive Server Implementation",
            "### Complete Server Examples",
        ],
    },
];

// Authored in full here; no guide backs this category.
const WEB_DOCS_TEXT: &str = concat!(
    "# MCP Web Documentation References\n\n",
    "## Official Documentation\n",
    "- **Main Website**: [modelcontextprotocol.io](https://modelcontextprotocol.io/)\n",
    "- **Introduction**: [modelcontextprotocol.io/introduction](https://modelcontextprotocol.io/introduction)\n",
    "- **Quickstart**: [modelcontextprotocol.io/quickstart](https://modelcontextprotocol.io/quickstart)\n",
    "- **Specification**: [github.com/modelcontextprotocol/specification](https://github.com/modelcontextprotocol/specification)\n\n",
    "## SDK Repositories\n",
    "- **TypeScript SDK**: [github.com/modelcontextprotocol/typescript-sdk](https://github.com/modelcontextprotocol/typescript-sdk)\n",
    "- **Python SDK**: [github.com/modelcontextprotocol/python-sdk](https://github.com/modelcontextprotocol/python-sdk)\n",
    "- **Kotlin SDK**: [github.com/modelcontextprotocol/kotlin-sdk](https://github.com/modelcontextprotocol/kotlin-sdk)\n",
    "- **Java SDK**: [github.com/modelcontextprotocol/java-sdk](https://github.com/modelcontextprotocol/java-sdk)\n",
    "- **C# SDK**: [github.com/modelcontextprotocol/csharp-sdk](https://github.com/modelcontextprotocol/csharp-sdk)\n\n",
    "## Community Resources\n",
    "- **Discord Community**: Join the MCP Discord for discussions and support\n",
    "- **GitHub Discussions**: Check the main repository for community discussions\n",
    "- **Example Servers**: Browse the modelcontextprotocol organization for example implementations\n",
);

const WEB_DOCS: &[Step] = &[Step::Literal(WEB_DOCS_TEXT)];

const FRAMEWORKS: &[Step] = &[
    Step::Literal("# MCP Frameworks and SDKs\n\n"),
    Step::Literal("## Available SDKs\n"),
    Step::Extract {
        guide: GuideRole::Reference,
        headings: &["## 3. SDK Selection", "### TypeScript SDK", "### Python SDK"],
    },
    Step::Literal("\n## Transport Layers\n"),
    Step::Extract {
        guide: GuideRole::Server,
        headings: &["### Transport Mechanisms", "#### stdio Transport"],
    },
    Step::Literal("\n## Framework Features\n"),
    Step::Literal("- **TypeScript**: Full feature support, recommended for production\n"),
    Step::Literal("- **Python**: Complete implementation, great for data science integrations\n"),
    Step::Literal("- **Kotlin/Java**: Android and JVM ecosystem support\n"),
    Step::Literal("- **C#**: .NET ecosystem integration\n"),
];

const SERVER_BASICS: &[Step] = &[
    Step::Literal("# MCP Server Development Basics\n\n"),
    Step::Extract {
        guide: GuideRole::Server,
        headings: &[
            "## 1. Introduction to MCP Servers",
            "## 2. Core Server Architecture",
            "## 3. Building Your First MCP Server (TypeScript)",
            "## 4. Exposing Capabilities",
        ],
    },
];

const CLIENT_BASICS: &[Step] = &[
    Step::Literal("# MCP Client Development Basics\n\n"),
    Step::Extract {
        guide: GuideRole::Client,
        headings: &[
            "## 1. Introduction to MCP Clients",
            "## 2. Core Client Architecture",
            "## 3. Building Your First MCP Client",
            "## 4. Discovering and Using Server Capabilities",
        ],
    },
];

const BEST_PRACTICES: &[Step] = &[
    Step::Literal("# MCP Development Best Practices\n\n"),
    Step::Literal("## Server Best Practices\n"),
    Step::Extract {
        guide: GuideRole::Server,
        headings: &[
            "## 6. Security and Best Practices",
            "### Security Considerations",
            "### Best Practices Checklist",
        ],
    },
    Step::Literal("\n## Client Best Practices\n"),
    Step::Extract {
        guide: GuideRole::Client,
        headings: &[
            "## 7. Security and Best Practices",
            "### Security Considerations",
            "### Best Practices for Client Development",
        ],
    },
    Step::Literal("\n## General Best Practices\n"),
    Step::Extract {
        guide: GuideRole::Reference,
        headings: &["## 14. Best Practices", "### Server Development Best Practices"],
    },
];

const PROTOCOL_DETAILS: &[Step] = &[
    Step::Literal("# MCP Protocol Details\n\n"),
    Step::Extract {
        guide: GuideRole::Reference,
        headings: &[
            "## 2. Core Concepts & Architecture",
            "## 5. MCP Protocol Standards",
            "### Transport Layer",
            "### Message Format",
        ],
    },
    Step::Literal("\n## Advanced Protocol Information\n"),
    Step::Extract {
        guide: GuideRole::Server,
        headings: &[
            "### Protocol Fundamentals",
            "### Message Types",
            "### Request-Response Pattern",
        ],
    },
];

const TROUBLESHOOTING: &[Step] = &[
    Step::Literal("# MCP Troubleshooting Guide\n\n"),
    Step::Literal("## Server Troubleshooting\n"),
    Step::Extract {
        guide: GuideRole::Server,
        headings: &[
            "## 7. Troubleshooting and Resources",
            "### Common Issues and Solutions",
            "### Debugging Tips",
        ],
    },
    Step::Literal("\n## Client Troubleshooting\n"),
    Step::Extract {
        guide: GuideRole::Client,
        headings: &[
            "## 8. Troubleshooting and Common Issues",
            "### Debugging MCP Clients",
            "### Common Problems and Solutions",
        ],
    },
    Step::Literal("\n## General Debugging Tips\n"),
    Step::Literal("- Enable debug logging in your MCP implementation\n"),
    Step::Literal("- Use the MCP inspector tools for protocol debugging\n"),
    Step::Literal("- Check transport layer connectivity first\n"),
    Step::Literal("- Validate message schemas match the specification\n"),
    Step::Literal("- Ensure proper error handling throughout the stack\n"),
];
