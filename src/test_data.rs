#[cfg(test)]
pub const LEGACY_POST: &str = "---
layout: post
title: 记一次博客迁移
subtitle: from jekyll
date: 2018-05-01 10:00:00
updated: 2018-06-12
headerImage: http://img.example.com/header.png
tags:
  - blog
  - 随笔
---

# 前言

> 旧博客已经用了很多年

* [Jekyll](https://jekyllrb.com) 太慢了
这次把博客从 [Jekyll](https://jekyllrb.com) 迁移到 *Astro*，顺便把 `resources` 目录里的图片都整理了一遍。

![cover](cover.jpg)

![logo](https://cdn.example.com/logo.png)

![sketch](../resources/sketch.png)";

#[cfg(test)]
pub const PLAIN_POST: &str = "---
title: My Post
tags:
- tech
- life
headerImage: http://x/img.png
---
# Heading

This is a sufficiently long first paragraph of the post for description.";
